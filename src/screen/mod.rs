pub mod removal;
pub mod tasks;
pub mod view_state;
pub mod watchlist;

pub use removal::{Outcome, RemovalPhase, RemovalWorkflow};
pub use tasks::{Envelope, Tasks};
pub use view_state::ViewState;
pub use watchlist::{Effect, Navigation, Phase, Reaction, Response, ViewStatus, WatchlistScreen};

/// Identity of one mounted screen; responses carry the id of their issuer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MountId(u64);

impl MountId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}
