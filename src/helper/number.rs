use std::cmp::Ordering;

use rust_decimal::Decimal;

pub trait Sign {
    fn positive(&self) -> bool;
    fn sign(&self) -> Ordering;
}

impl Sign for Decimal {
    fn positive(&self) -> bool {
        self.is_sign_positive() && !self.is_zero()
    }

    fn sign(&self) -> Ordering {
        if self.is_zero() {
            Ordering::Equal
        } else if self.is_sign_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

/// Format volume to short format
/// Example: 2500000 → 2.5M, 12300 → 12.3K
pub fn format_volume(volume: u64) -> String {
    if volume == 0 {
        return "N/A".to_string();
    }

    #[allow(clippy::cast_precision_loss)]
    let volume_f = volume as f64;
    if volume > 1_000_000 {
        format!("{:.1}M", volume_f / 1_000_000.0)
    } else if volume >= 1_000 {
        format!("{:.1}K", volume_f / 1_000.0)
    } else {
        volume.to_string()
    }
}

/// Rupee amount with two decimals, `N/A` when unknown
pub fn format_price(price: Option<Decimal>) -> String {
    match price {
        Some(price) => format!("₹{:.2}", price.round_dp(2)),
        None => "N/A".to_string(),
    }
}

pub fn format_change(percent: Option<Decimal>) -> String {
    match percent {
        Some(p) if p.positive() => format!("+{:.2}%", p.round_dp(2)),
        Some(p) => format!("{:.2}%", p.round_dp(2)),
        None => "N/A".to_string(),
    }
}
