use serde::{Deserialize, Serialize};

/// Shariah-compliance verdict for a listed stock
///
/// The backend is inconsistent about casing (`Halal`, `halal`, `HALAL`), so
/// every value is folded into this enum once at the wire boundary.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Halal,
    Doubtful,
    Haram,
}

impl Classification {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "halal" => Some(Self::Halal),
            "doubtful" => Some(Self::Doubtful),
            "haram" => Some(Self::Haram),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Halal => "halal",
            Self::Doubtful => "doubtful",
            Self::Haram => "haram",
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Halal => t!("classification.halal"),
            Self::Doubtful => t!("classification.doubtful"),
            Self::Haram => t!("classification.haram"),
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter chip selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Halal,
    Doubtful,
    Haram,
}

impl Filter {
    pub const ORDER: [Self; 4] = [Self::All, Self::Halal, Self::Doubtful, Self::Haram];

    pub fn classification(self) -> Option<Classification> {
        match self {
            Self::All => None,
            Self::Halal => Some(Classification::Halal),
            Self::Doubtful => Some(Classification::Doubtful),
            Self::Haram => Some(Classification::Haram),
        }
    }

    pub fn matches(self, classification: Classification) -> bool {
        self.classification().is_none_or(|c| c == classification)
    }

    pub fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    pub fn label(self) -> String {
        match self.classification() {
            Some(c) => c.label(),
            None => t!("filter.all"),
        }
    }
}

impl From<Classification> for Filter {
    fn from(c: Classification) -> Self {
        match c {
            Classification::Halal => Self::Halal,
            Classification::Doubtful => Self::Doubtful,
            Classification::Haram => Self::Haram,
        }
    }
}

/// Layout of the visible entries
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

/// Subscription tier, supplied by the account backend
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    #[default]
    Free,
    Basic,
    Premium,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown plan `{0}` (expected free, basic or premium)")]
pub struct UnknownPlan(pub String);

impl PlanTier {
    /// Number of symbols the backend accepts on this plan
    pub fn watchlist_limit(self) -> usize {
        match self {
            Self::Free => 10,
            Self::Basic => 30,
            Self::Premium => 50,
        }
    }

    pub fn is_free(self) -> bool {
        self == Self::Free
    }

    pub fn label(self) -> String {
        match self {
            Self::Free => t!("plan.free"),
            Self::Basic => t!("plan.basic"),
            Self::Premium => t!("plan.premium"),
        }
    }
}

impl std::str::FromStr for PlanTier {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Ok(Self::Free),
            "basic" => Ok(Self::Basic),
            "premium" => Ok(Self::Premium),
            _ => Err(UnknownPlan(s.to_string())),
        }
    }
}
