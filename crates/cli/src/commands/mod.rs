//! CLI commands for the settlement engine.

pub mod draft;
pub mod output;
pub mod session;
pub mod watch;

pub use draft::{run_draft, DraftArgs};
pub use session::{run_calculate, run_check, CalculateArgs, CheckArgs};
pub use watch::{run_watch, WatchArgs};
