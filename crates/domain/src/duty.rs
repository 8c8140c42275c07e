use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::position::PositionId;
use crate::shift::ShiftWindow;
use crate::soldier::SoldierId;

/// Server-assigned identifier for a committed guard duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuardDutyId(i64);

impl GuardDutyId {
    /// Creates a duty identifier from a raw server value.
    #[must_use]
    pub fn from_raw(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw server value.
    #[must_use]
    pub fn as_raw(&self) -> i64 {
        self.0
    }
}

impl Display for GuardDutyId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A committed assignment of one soldier to one position for one interval,
/// as listed by the collaborator (participants resolved to display names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardDuty {
    /// Server-assigned identifier.
    pub id: GuardDutyId,
    /// Position display name.
    pub position: String,
    /// Soldier display name.
    pub soldier: String,
    /// Absolute start timestamp (naive, collaborator-local).
    pub start_time: NaiveDateTime,
    /// Absolute end timestamp.
    pub end_time: NaiveDateTime,
}

/// Commit request for one proposed assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGuardDuty {
    /// Assigned soldier.
    pub soldier_id: SoldierId,
    /// Resolved position.
    pub position_id: PositionId,
    /// Absolute start timestamp.
    pub start_time: NaiveDateTime,
    /// Absolute end timestamp.
    pub end_time: NaiveDateTime,
}

/// One proposed assignment from the generation collaborator.
///
/// Carries the station *name*, not an id; resolution against the locally
/// loaded position catalog is the orchestrator's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedShift {
    /// Station display name.
    pub station: String,
    /// Proposed soldier.
    pub soldier_id: SoldierId,
    /// Proposed soldier's display name.
    pub soldier_name: String,
    /// Proposed start timestamp.
    pub start_time: NaiveDateTime,
    /// Proposed end timestamp.
    pub end_time: NaiveDateTime,
}

/// Request body for the generation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateShiftsRequest {
    /// Ordered operator-configured time windows.
    pub shift_times: Vec<ShiftWindow>,
}

/// Response from the generation collaborator: proposals plus human-readable
/// infeasibility warnings. Warnings never block the shifts that were produced.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenerateShiftsResponse {
    /// Human-readable infeasibility notes (e.g. under-staffed positions).
    #[serde(default)]
    pub warnings: Vec<String>,
    /// Proposed assignments; not durable until individually committed.
    #[serde(default)]
    pub generated_shifts: Vec<GeneratedShift>,
}
