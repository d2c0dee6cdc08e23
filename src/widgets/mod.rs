mod loading;
mod search;
mod terminal;

pub use loading::{Loading, LoadingWidget};
pub use search::{SearchBox, SearchOutcome};
pub use terminal::Terminal;
