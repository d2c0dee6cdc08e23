use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;

use super::removal::{RemovalPhase, RemovalWorkflow};
use super::view_state::ViewState;
use super::MountId;
use crate::api::{ApiError, WatchlistRecord};
use crate::data::{filter, Counts, Filter, PlanTier, PriceSnapshot, StockEntry, ViewMode, Watchlist};
use crate::helper::cycle;
use crate::render::DirtyFlags;
use crate::widgets::SearchOutcome;

/// Where the collection stands for this mount
#[derive(Clone, Debug)]
pub enum Phase {
    Loading,
    Failed(String),
    Loaded(Watchlist),
}

/// The single UI state the body renders
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Error,
    /// The collection itself is empty
    TrueEmpty,
    /// Search or filter hides every entry
    FilteredEmpty,
    Ready,
}

/// Work the screen asks its owner to run
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Fetch,
    Remove(String),
    /// Price lookups for the entries of one load
    Prices { load: u64, symbols: Vec<String> },
}

/// Answer to an `Effect`, routed back to the mount that asked
#[derive(Debug)]
pub enum Response {
    Fetched(Result<Vec<WatchlistRecord>, ApiError>),
    Removed {
        symbol: String,
        result: Result<(), ApiError>,
    },
    Price {
        load: u64,
        symbol: String,
        snapshot: PriceSnapshot,
    },
}

/// Requests for the surrounding shell; the screen does not interpret them
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    DiscoverStocks,
    Upgrade,
    Back,
    StockDetail(String),
}

#[derive(Debug)]
pub struct Reaction {
    pub effects: Vec<Effect>,
    pub navigation: Option<Navigation>,
    pub dirty: DirtyFlags,
}

impl Default for Reaction {
    fn default() -> Self {
        Self {
            effects: vec![],
            navigation: None,
            dirty: DirtyFlags::NONE,
        }
    }
}

impl Reaction {
    fn dirty(dirty: DirtyFlags) -> Self {
        Self {
            dirty,
            ..Self::default()
        }
    }

    fn navigate(navigation: Navigation) -> Self {
        Self {
            navigation: Some(navigation),
            ..Self::default()
        }
    }
}

/// Everything one mounted watchlist page owns
#[derive(Debug)]
pub struct WatchlistScreen {
    mount: MountId,
    plan: PlanTier,
    phase: Phase,
    view: ViewState,
    removal: RemovalWorkflow,
    /// Index into the visible subset
    selected: Option<usize>,
    help: bool,
    columns: usize,
    prices: bool,
    /// Bumped by every refresh; prices from an older load are dropped
    load: u64,
}

impl WatchlistScreen {
    /// Fresh screen with default view state, plus the initial fetch
    pub fn mount(
        mount: MountId,
        plan: PlanTier,
        notice_for: Duration,
        prices: bool,
    ) -> (Self, Vec<Effect>) {
        tracing::debug!(mount = mount.get(), plan = ?plan, "watchlist mounted");
        let screen = Self {
            mount,
            plan,
            phase: Phase::Loading,
            view: ViewState::default(),
            removal: RemovalWorkflow::new(notice_for),
            selected: None,
            help: false,
            columns: 1,
            prices,
            load: 0,
        };
        (screen, vec![Effect::Fetch])
    }

    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    /// Stale-response guard
    pub fn accepts(&self, mount: MountId) -> bool {
        self.mount == mount
    }

    pub fn plan(&self) -> PlanTier {
        self.plan
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn removal(&self) -> &RemovalWorkflow {
        &self.removal
    }

    pub fn help_visible(&self) -> bool {
        self.help
    }

    pub fn watchlist(&self) -> Option<&Watchlist> {
        match &self.phase {
            Phase::Loaded(watchlist) => Some(watchlist),
            Phase::Loading | Phase::Failed(_) => None,
        }
    }

    pub fn counts(&self) -> Counts {
        self.watchlist().map(Watchlist::counts).unwrap_or_default()
    }

    /// Entries passing the current filter and search, in collection order
    pub fn visible(&self) -> Vec<&StockEntry> {
        self.watchlist().map_or_else(Vec::new, |w| {
            filter::apply(w.entries(), self.view.filter, self.view.search_text())
        })
    }

    pub fn status(&self) -> ViewStatus {
        match &self.phase {
            Phase::Loading => ViewStatus::Loading,
            Phase::Failed(_) => ViewStatus::Error,
            Phase::Loaded(w) if w.is_empty() => ViewStatus::TrueEmpty,
            Phase::Loaded(_) if self.visible().is_empty() => ViewStatus::FilteredEmpty,
            Phase::Loaded(_) => ViewStatus::Ready,
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&StockEntry> {
        self.selected.and_then(|idx| self.visible().get(idx).copied())
    }

    /// Number of card columns the grid currently lays out
    pub fn set_grid_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    /// Advance time-based state; returns what needs repainting
    pub fn tick(&mut self, now: Instant) -> DirtyFlags {
        if self.removal.tick(now) {
            DirtyFlags::NONE.mark_removal_change()
        } else {
            DirtyFlags::NONE
        }
    }

    pub fn handle_key(&mut self, event: KeyEvent) -> Reaction {
        if self.help {
            self.help = false;
            return Reaction::dirty(DirtyFlags::ALL);
        }
        if !self.removal.is_idle() {
            return self.handle_modal_key(event);
        }
        if self.view.search.is_focused() {
            return self.handle_search_key(event);
        }

        match (self.status(), event) {
            (_, key!('?')) => {
                self.help = true;
                Reaction::dirty(DirtyFlags::POPUP_HELP)
            }
            (_, key!('q') | key!(Esc)) => Reaction::navigate(Navigation::Back),
            (ViewStatus::Loading, _) => Reaction::default(),
            (_, key!('r')) => self.refresh(),
            (ViewStatus::Error, _) => Reaction::default(),
            (ViewStatus::TrueEmpty, key!('s')) => Reaction::navigate(Navigation::DiscoverStocks),
            (ViewStatus::TrueEmpty, key!('u')) if self.plan.is_free() => {
                Reaction::navigate(Navigation::Upgrade)
            }
            (_, key!('/')) => {
                self.view.search.focus();
                Reaction::dirty(DirtyFlags::SEARCH)
            }
            (_, key!('c')) => {
                self.view.clear_filters();
                self.reselect();
                Reaction::dirty(DirtyFlags::NONE.mark_visible_change())
            }
            (_, key!(Tab)) => self.set_filter(self.view.filter.next()),
            (_, shift!(BackTab)) => self.set_filter(self.view.filter.prev()),
            (_, key!('0')) => self.set_filter(Filter::All),
            (_, key!('1')) => self.set_filter(Filter::Halal),
            (_, key!('2')) => self.set_filter(Filter::Doubtful),
            (_, key!('3')) => self.set_filter(Filter::Haram),
            (_, key!('v')) => {
                self.view.view_mode = self.view.view_mode.toggle();
                Reaction::dirty(DirtyFlags::WATCHLIST)
            }
            (_, key!(Up) | key!('k')) => self.move_selection(Move::Up),
            (_, key!(Down) | key!('j')) => self.move_selection(Move::Down),
            (_, key!(Left) | key!('h')) => self.move_selection(Move::Left),
            (_, key!(Right) | key!('l')) => self.move_selection(Move::Right),
            (ViewStatus::Ready, key!(Enter)) => self
                .selected_entry()
                .map(|e| Reaction::navigate(Navigation::StockDetail(e.symbol.clone())))
                .unwrap_or_default(),
            (ViewStatus::Ready, key!('d') | key!(Delete)) => self.request_removal(),
            _ => Reaction::default(),
        }
    }

    fn handle_modal_key(&mut self, event: KeyEvent) -> Reaction {
        match (self.removal.phase(), event) {
            (RemovalPhase::ConfirmPending { .. }, key!('y') | key!(Enter)) => {
                let Some(symbol) = self.removal.confirm() else {
                    return Reaction::default();
                };
                tracing::info!(symbol = %symbol, "removal confirmed");
                Reaction {
                    effects: vec![Effect::Remove(symbol)],
                    navigation: None,
                    dirty: DirtyFlags::MODAL,
                }
            }
            (RemovalPhase::ConfirmPending { .. }, key!('n') | key!(Esc))
            | (RemovalPhase::Notice { .. }, key!(Esc) | key!(Enter)) => {
                self.removal.cancel();
                Reaction::dirty(DirtyFlags::NONE.mark_removal_change())
            }
            // the modal owns the keyboard; nothing else may start while it is open
            _ => Reaction::default(),
        }
    }

    fn handle_search_key(&mut self, event: KeyEvent) -> Reaction {
        match self.view.search.handle_key(event) {
            SearchOutcome::Changed => {
                self.reselect();
                Reaction::dirty(DirtyFlags::NONE.mark_visible_change())
            }
            SearchOutcome::Left | SearchOutcome::Unchanged => Reaction::dirty(DirtyFlags::SEARCH),
        }
    }

    fn refresh(&mut self) -> Reaction {
        tracing::info!(mount = self.mount.get(), "watchlist refresh requested");
        self.phase = Phase::Loading;
        self.selected = None;
        self.load = self.load.wrapping_add(1);
        Reaction {
            effects: vec![Effect::Fetch],
            navigation: None,
            dirty: DirtyFlags::ALL,
        }
    }

    fn set_filter(&mut self, filter: Filter) -> Reaction {
        if self.view.filter == filter {
            return Reaction::default();
        }
        self.view.filter = filter;
        self.reselect();
        Reaction::dirty(DirtyFlags::NONE.mark_visible_change())
    }

    fn request_removal(&mut self) -> Reaction {
        let Some(symbol) = self.selected_entry().map(|e| e.symbol.clone()) else {
            return Reaction::default();
        };
        match self.removal.request(symbol) {
            Ok(()) => Reaction::dirty(DirtyFlags::MODAL),
            Err(err) => {
                tracing::debug!(%err, "removal request ignored");
                Reaction::default()
            }
        }
    }

    fn move_selection(&mut self, step: Move) -> Reaction {
        let all = self.visible().len();
        let grid = self.view.view_mode == ViewMode::Grid;
        self.selected = match step {
            Move::Up if grid => cycle::row_up(self.selected, self.columns, all),
            Move::Down if grid => cycle::row_down(self.selected, self.columns, all),
            Move::Up | Move::Left => cycle::prev(self.selected, all),
            Move::Down | Move::Right => cycle::next(self.selected, all),
        };
        Reaction::dirty(DirtyFlags::WATCHLIST)
    }

    /// Point the cursor at the first visible entry after membership changed
    fn reselect(&mut self) {
        self.selected = (!self.visible().is_empty()).then_some(0);
    }

    /// Keep the cursor inside the visible subset
    fn clamp_selection(&mut self) {
        let all = self.visible().len();
        self.selected = match self.selected {
            _ if all == 0 => None,
            Some(idx) => Some(idx.min(all - 1)),
            None => Some(0),
        };
    }

    /// Apply a response that already passed `accepts`
    pub fn on_response(&mut self, response: Response, now: Instant) -> Vec<Effect> {
        match response {
            Response::Fetched(result) => self.on_fetched(result),
            Response::Removed { symbol, result } => {
                let message = result.as_ref().err().map(|err| {
                    tracing::warn!(symbol = %symbol, status = ?err.status(), error = %err, "removal failed");
                    err.user_message()
                });
                let succeeded = message.is_none();
                let outcome = message.map_or(Ok(()), Err);
                if self.removal.resolve(&symbol, outcome, now) && succeeded {
                    if let Phase::Loaded(watchlist) = &mut self.phase {
                        watchlist.remove(&symbol);
                    }
                    self.clamp_selection();
                }
                vec![]
            }
            Response::Price { load, .. } if load != self.load => {
                tracing::debug!(load, current = self.load, "price from an earlier load dropped");
                vec![]
            }
            Response::Price { symbol, snapshot, .. } => {
                if let Phase::Loaded(watchlist) = &mut self.phase {
                    watchlist.attach_price(&symbol, snapshot);
                }
                vec![]
            }
        }
    }

    fn on_fetched(&mut self, result: Result<Vec<WatchlistRecord>, ApiError>) -> Vec<Effect> {
        if !matches!(self.phase, Phase::Loading) {
            tracing::debug!("unexpected watchlist response ignored");
            return vec![];
        }
        match result {
            Ok(records) => {
                let watchlist = Watchlist::from_records(records);
                let symbols: Vec<String> =
                    watchlist.entries().iter().map(|e| e.symbol.clone()).collect();
                self.phase = Phase::Loaded(watchlist);
                self.clamp_selection();
                if self.prices && !symbols.is_empty() {
                    vec![Effect::Prices {
                        load: self.load,
                        symbols,
                    }]
                } else {
                    vec![]
                }
            }
            Err(err) => {
                tracing::error!(status = ?err.status(), error = %err, "watchlist fetch failed");
                self.phase = Phase::Failed(err.user_message());
                vec![]
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Move {
    Up,
    Down,
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::{Effect, Navigation, Response, ViewStatus, WatchlistScreen};
    use crate::api::{ApiError, StockDataRecord, WatchlistRecord};
    use crate::data::{Counts, Filter, PlanTier, PriceSnapshot, ViewMode};
    use crate::screen::removal::{Outcome, RemovalPhase};
    use crate::screen::MountId;
    use rust_decimal_macros::dec;
    use std::time::{Duration, Instant};

    fn record(symbol: &str, name: &str, classification: &str) -> WatchlistRecord {
        WatchlistRecord {
            symbol: symbol.to_string(),
            company_name: name.to_string(),
            stock_data: Some(StockDataRecord {
                initial_classification: Some(classification.to_string()),
                haram_reason: None,
            }),
        }
    }

    fn records() -> Vec<WatchlistRecord> {
        vec![
            record("TCS", "Tata Consultancy Services", "Halal"),
            record("HDFCBANK", "HDFC Bank", "doubtful"),
            record("ITC", "ITC Limited", "HARAM"),
        ]
    }

    fn mounted() -> WatchlistScreen {
        let (screen, effects) =
            WatchlistScreen::mount(MountId::new(1), PlanTier::Free, Duration::from_millis(1500), false);
        assert_eq!(effects, [Effect::Fetch]);
        screen
    }

    fn loaded() -> WatchlistScreen {
        let mut screen = mounted();
        screen.on_response(Response::Fetched(Ok(records())), Instant::now());
        screen
    }

    fn symbols(screen: &WatchlistScreen) -> Vec<String> {
        screen.visible().iter().map(|e| e.symbol.clone()).collect()
    }

    fn type_text(screen: &mut WatchlistScreen, text: &str) {
        screen.handle_key(key!('/'));
        for c in text.chars() {
            screen.handle_key(crossterm::event::KeyEvent::new(
                crossterm::event::KeyCode::Char(c),
                crossterm::event::KeyModifiers::NONE,
            ));
        }
        screen.handle_key(key!(Enter));
    }

    fn price(load: u64, symbol: &str, current: rust_decimal::Decimal) -> Response {
        Response::Price {
            load,
            symbol: symbol.to_string(),
            snapshot: PriceSnapshot {
                current,
                change_percent: Some(dec!(-0.4)),
                high24: None,
                low24: None,
                volume: Some(1_200_000),
            },
        }
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            status: 500,
            message: "Internal server error".to_string(),
        }
    }

    #[test]
    fn starts_loading_with_inert_controls() {
        let mut screen = mounted();
        assert_eq!(screen.status(), ViewStatus::Loading);
        for key in [key!('1'), key!(Tab), key!('/'), key!('d'), key!('v'), key!('r')] {
            let reaction = screen.handle_key(key);
            assert!(reaction.effects.is_empty());
        }
        assert_eq!(screen.view().filter, Filter::All);
        assert!(!screen.view().search.is_focused());
        assert!(screen.removal().is_idle());
        assert_eq!(screen.status(), ViewStatus::Loading);
    }

    #[test]
    fn empty_response_is_true_empty() {
        let mut screen = mounted();
        screen.on_response(Response::Fetched(Ok(vec![])), Instant::now());
        assert_eq!(screen.status(), ViewStatus::TrueEmpty);
        assert_eq!(screen.counts(), Counts::default());
    }

    #[test]
    fn fetch_failure_offers_retry() {
        let mut screen = mounted();
        screen.on_response(Response::Fetched(Err(server_error())), Instant::now());
        assert_eq!(screen.status(), ViewStatus::Error);
        assert!(screen.visible().is_empty());

        let reaction = screen.handle_key(key!('r'));
        assert_eq!(reaction.effects, [Effect::Fetch]);
        assert_eq!(screen.status(), ViewStatus::Loading);

        screen.on_response(Response::Fetched(Ok(records())), Instant::now());
        assert_eq!(screen.status(), ViewStatus::Ready);
    }

    #[test]
    fn halal_filter_shows_only_halal_entry() {
        let mut screen = loaded();
        screen.handle_key(key!('1'));
        assert_eq!(screen.view().filter, Filter::Halal);
        assert_eq!(symbols(&screen), ["TCS"]);
        assert_eq!(
            screen.counts(),
            Counts {
                all: 3,
                halal: 1,
                doubtful: 1,
                haram: 1
            }
        );
    }

    #[test]
    fn unmatched_search_then_clear_filters_restores_everything() {
        let mut screen = loaded();
        type_text(&mut screen, "xyznonexistent");
        assert_eq!(screen.status(), ViewStatus::FilteredEmpty);
        assert_eq!(screen.selected(), None);

        screen.handle_key(key!('c'));
        assert_eq!(screen.view().search_text(), "");
        assert_eq!(screen.status(), ViewStatus::Ready);
        assert_eq!(symbols(&screen), ["TCS", "HDFCBANK", "ITC"]);
    }

    #[test]
    fn search_matches_company_name() {
        let mut screen = loaded();
        type_text(&mut screen, "bank");
        assert_eq!(symbols(&screen), ["HDFCBANK"]);
        assert_eq!(screen.selected_entry().map(|e| e.symbol.as_str()), Some("HDFCBANK"));
    }

    #[test]
    fn cancel_leaves_collection_untouched() {
        let mut screen = loaded();
        let before = screen.counts();
        screen.handle_key(key!('d'));
        assert_eq!(screen.removal().pending(), Some("TCS"));

        let reaction = screen.handle_key(key!('n'));
        assert!(reaction.effects.is_empty());
        assert!(screen.removal().is_idle());
        assert_eq!(screen.counts(), before);
        assert_eq!(symbols(&screen).len(), 3);
    }

    #[test]
    fn confirmed_removal_waits_for_acknowledgement() {
        let mut screen = loaded();
        let now = Instant::now();
        screen.handle_key(key!(Down));
        screen.handle_key(key!('d'));
        let reaction = screen.handle_key(key!('y'));
        assert_eq!(reaction.effects, [Effect::Remove("HDFCBANK".to_string())]);
        // nothing changes before the backend answers
        assert_eq!(symbols(&screen).len(), 3);

        screen.on_response(
            Response::Removed {
                symbol: "HDFCBANK".to_string(),
                result: Ok(()),
            },
            now,
        );
        assert_eq!(symbols(&screen), ["TCS", "ITC"]);
        assert_eq!(screen.counts().doubtful, 0);
        assert_eq!(screen.counts().all, 2);
        assert!(matches!(
            screen.removal().phase(),
            RemovalPhase::Notice { .. }
        ));

        screen.tick(now + Duration::from_millis(1500));
        assert!(screen.removal().is_idle());
    }

    #[test]
    fn failed_removal_keeps_entry() {
        let mut screen = loaded();
        let now = Instant::now();
        screen.handle_key(key!('d'));
        screen.handle_key(key!(Enter));
        screen.on_response(
            Response::Removed {
                symbol: "TCS".to_string(),
                result: Err(server_error()),
            },
            now,
        );
        assert_eq!(symbols(&screen), ["TCS", "HDFCBANK", "ITC"]);
        match screen.removal().phase() {
            RemovalPhase::Notice { outcome, .. } => assert_eq!(
                outcome,
                &Outcome::Failed("Internal server error".to_string())
            ),
            other => panic!("unexpected phase {other:?}"),
        }
        screen.tick(now + Duration::from_secs(5));
        assert!(screen.removal().is_idle());
    }

    #[test]
    fn open_modal_blocks_a_second_removal() {
        let mut screen = loaded();
        screen.handle_key(key!('d'));
        screen.handle_key(key!(Down));
        screen.handle_key(key!('d'));
        assert_eq!(screen.removal().pending(), Some("TCS"));
        assert_eq!(screen.selected(), Some(0));
    }

    #[test]
    fn view_toggle_keeps_visible_membership() {
        let mut screen = loaded();
        screen.handle_key(key!('3'));
        type_text(&mut screen, "itc");
        let before = symbols(&screen);

        screen.handle_key(key!('v'));
        assert_eq!(screen.view().view_mode, ViewMode::List);
        assert_eq!(screen.view().filter, Filter::Haram);
        assert_eq!(screen.view().search_text(), "itc");
        assert_eq!(symbols(&screen), before);
    }

    #[test]
    fn navigation_requests_are_passed_out() {
        let mut screen = loaded();
        assert_eq!(
            screen.handle_key(key!(Enter)).navigation,
            Some(Navigation::StockDetail("TCS".to_string()))
        );
        assert_eq!(screen.handle_key(key!('q')).navigation, Some(Navigation::Back));
    }

    #[test]
    fn discover_and_upgrade_only_from_an_empty_watchlist() {
        let mut screen = loaded();
        assert_eq!(screen.handle_key(key!('s')).navigation, None);
        assert_eq!(screen.handle_key(key!('u')).navigation, None);

        let mut empty = mounted();
        empty.on_response(Response::Fetched(Ok(vec![])), Instant::now());
        assert_eq!(empty.status(), ViewStatus::TrueEmpty);
        assert_eq!(
            empty.handle_key(key!('s')).navigation,
            Some(Navigation::DiscoverStocks)
        );
        assert_eq!(empty.handle_key(key!('u')).navigation, Some(Navigation::Upgrade));

        let (mut premium, _) =
            WatchlistScreen::mount(MountId::new(1), PlanTier::Premium, Duration::from_secs(1), false);
        premium.on_response(Response::Fetched(Ok(vec![])), Instant::now());
        assert_eq!(
            premium.handle_key(key!('s')).navigation,
            Some(Navigation::DiscoverStocks)
        );
        assert_eq!(premium.handle_key(key!('u')).navigation, None);
    }

    #[test]
    fn grid_navigation_moves_by_rows() {
        let mut screen = loaded();
        screen.set_grid_columns(2);
        assert_eq!(screen.selected(), Some(0));
        screen.handle_key(key!(Down));
        assert_eq!(screen.selected(), Some(2));
        screen.handle_key(key!(Left));
        assert_eq!(screen.selected(), Some(1));
        screen.handle_key(key!(Up));
        assert_eq!(screen.selected(), Some(1));
    }

    #[test]
    fn prices_are_requested_and_attached() {
        let (mut screen, _) =
            WatchlistScreen::mount(MountId::new(7), PlanTier::Premium, Duration::from_secs(1), true);
        let effects = screen.on_response(Response::Fetched(Ok(records())), Instant::now());
        assert_eq!(
            effects,
            [Effect::Prices {
                load: 0,
                symbols: vec!["TCS".to_string(), "HDFCBANK".to_string(), "ITC".to_string()],
            }]
        );

        screen.on_response(price(0, "ITC", dec!(431.2)), Instant::now());
        let itc = screen.visible()[2].clone();
        assert_eq!(itc.price.map(|p| p.current), Some(dec!(431.2)));
    }

    #[test]
    fn prices_from_before_a_reload_are_dropped() {
        let (mut screen, _) =
            WatchlistScreen::mount(MountId::new(7), PlanTier::Premium, Duration::from_secs(1), true);
        let tcs = || vec![record("TCS", "Tata Consultancy Services", "Halal")];
        screen.on_response(Response::Fetched(Ok(tcs())), Instant::now());

        assert_eq!(screen.handle_key(key!('r')).effects, [Effect::Fetch]);
        let effects = screen.on_response(Response::Fetched(Ok(tcs())), Instant::now());
        assert_eq!(
            effects,
            [Effect::Prices {
                load: 1,
                symbols: vec!["TCS".to_string()],
            }]
        );

        screen.on_response(price(1, "TCS", dec!(200)), Instant::now());
        screen.on_response(price(0, "TCS", dec!(100)), Instant::now());
        let tcs = screen.visible()[0].clone();
        assert_eq!(tcs.price.map(|p| p.current), Some(dec!(200)));
    }

    #[test]
    fn only_the_own_mount_is_accepted() {
        let screen = mounted();
        assert!(screen.accepts(MountId::new(1)));
        assert!(!screen.accepts(MountId::new(2)));
        assert!(!screen.accepts(MountId::new(0)));
    }

    #[test]
    fn help_popup_closes_on_any_key() {
        let mut screen = loaded();
        screen.handle_key(key!('?'));
        assert!(screen.help_visible());
        let reaction = screen.handle_key(key!('q'));
        assert!(!screen.help_visible());
        assert_eq!(reaction.navigation, None);
    }

    #[test]
    fn contract_violations_do_not_reach_the_view() {
        let mut screen = mounted();
        let mut rows = records();
        rows.push(WatchlistRecord {
            symbol: "MYST".to_string(),
            company_name: "Mystery".to_string(),
            stock_data: None,
        });
        screen.on_response(Response::Fetched(Ok(rows)), Instant::now());
        assert_eq!(symbols(&screen).len(), 3);
        let watchlist = screen.watchlist().expect("loaded");
        assert_eq!(watchlist.violations().len(), 1);
        assert_eq!(screen.counts().all, 3);
    }
}
