//! Shared-session adapter.
//!
//! A stored session holds participants whose chip counts may not be entered
//! yet (`None`). Snapshots are read from a JSON file holding the session
//! record and its participant rows:
//!
//! ```json
//! {
//!   "session": { "id": "s1", "event_name": "Friday game", "coefficient": 5.0 },
//!   "participants": [
//!     { "id": "a", "session_id": "s1", "name": "Alice", "buy_chips": 1000, "final_chips": 1500, "venue_fee": 0 }
//!   ]
//! }
//! ```

use crate::engine;
use crate::error::SessionError;
use crate::numeric::{finite_or_zero, resolve_optional};
use crate::participant::{CalculationResult, ParticipantInput};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Session header: event label and chip value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub event_name: String,
    /// Cash value of one chip
    pub coefficient: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Participant row as stored for a shared session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredParticipant {
    pub id: String,
    #[serde(default)]
    pub session_id: String,
    pub name: String,
    /// `None` until the participant has entered their figures
    #[serde(default)]
    pub buy_chips: Option<f64>,
    #[serde(default)]
    pub final_chips: Option<f64>,
    #[serde(default)]
    pub venue_fee: f64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl StoredParticipant {
    /// True once both chip counts have been entered.
    #[must_use]
    pub const fn is_entered(&self) -> bool {
        self.buy_chips.is_some() && self.final_chips.is_some()
    }
}

impl From<&StoredParticipant> for ParticipantInput {
    fn from(p: &StoredParticipant) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            buy_chips: resolve_optional(p.buy_chips),
            final_chips: resolve_optional(p.final_chips),
            venue_fee: finite_or_zero(p.venue_fee),
        }
    }
}

/// Consistent point-in-time view of one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session: SessionRecord,
    #[serde(default)]
    pub participants: Vec<StoredParticipant>,
}

impl SessionSnapshot {
    /// Reads a snapshot from a JSON file.
    ///
    /// Participant rows belonging to another session are dropped; the rest are
    /// ordered by creation time (rows without a timestamp first, in file order).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid snapshot.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let snapshot: Self = serde_json::from_reader(BufReader::new(file))?;
        let snapshot = snapshot.normalized();

        info!(
            path = %path.display(),
            session = %snapshot.session.id,
            participants = snapshot.participants.len(),
            "Loaded session snapshot"
        );

        Ok(snapshot)
    }

    /// Keeps this session's rows and orders them by creation time.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let session_id = self.session.id.clone();
        self.participants
            .retain(|p| p.session_id.is_empty() || p.session_id == session_id);
        self.participants.sort_by_key(|p| p.created_at);
        self
    }

    /// Normalized engine inputs for every participant.
    #[must_use]
    pub fn inputs(&self) -> Vec<ParticipantInput> {
        self.participants.iter().map(ParticipantInput::from).collect()
    }

    /// Runs the engine with the session's coefficient.
    ///
    /// Does not apply the readiness gate; see [`crate::readiness::check_readiness`].
    #[must_use]
    pub fn calculate(&self) -> CalculationResult {
        engine::calculate(&self.inputs(), self.session.coefficient)
    }
}
