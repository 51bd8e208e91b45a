pub mod config;
pub mod config_loader;
pub mod draft;
pub mod engine;
pub mod error;
pub mod numeric;
pub mod participant;
pub mod pnl;
pub mod readiness;
pub mod report;
pub mod session;
pub mod session_watcher;
pub mod settlement;

pub use config::{AppConfig, DefaultsConfig, OutputConfig, OutputFormat};
pub use config_loader::ConfigLoader;
pub use draft::{DraftEvent, DraftParticipant};
pub use engine::calculate;
pub use error::SessionError;
pub use participant::{CalculationResult, ParticipantInput, ParticipantResult, Settlement};
pub use pnl::PnlOutcome;
pub use readiness::{check_draft, check_readiness, check_setup, Readiness};
pub use report::ReportFormatter;
pub use session::{SessionRecord, SessionSnapshot, StoredParticipant};
pub use session_watcher::SessionWatcher;
pub use settlement::Balance;
