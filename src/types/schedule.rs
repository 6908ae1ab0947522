//! Availability slots, shift templates, and swap requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, RotaError};

/// A start/end pair the backend requires to be strictly ordered.
///
/// Every constructor, including deserialization, goes through
/// [`TimeWindow::new`], so a value of this type is always ordered.
///
/// # Example
/// ```
/// use chrono::{Duration, Utc};
/// use flexirota::types::TimeWindow;
///
/// let start = Utc::now();
/// assert!(TimeWindow::new(start, start + Duration::hours(8)).is_ok());
/// assert!(TimeWindow::new(start, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct TimeWindow {
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawWindow {
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
}

impl TryFrom<RawWindow> for TimeWindow {
    type Error = RotaError;

    fn try_from(raw: RawWindow) -> Result<Self> {
        Self::new(raw.start_time, raw.end_time)
    }
}

impl TimeWindow {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Result<Self> {
        if end_time <= start_time {
            return Err(RotaError::InvalidArgument(
                "Start time must be before end time.".to_string(),
            ));
        }
        Ok(Self {
            start_time,
            end_time,
        })
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }
}

/// A block of time an employee has marked on their rota.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub id: i64,
    #[serde(default)]
    pub user: Option<i64>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl Availability {
    /// The slot as a validated window. Fails if the backend returned a
    /// reversed or empty slot.
    pub fn window(&self) -> Result<TimeWindow> {
        TimeWindow::new(self.start_time, self.end_time)
    }
}

/// Headcount needed for one job title on a shift template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequirement {
    /// [`RoleTitle`](crate::types::RoleTitle) id.
    pub role: i64,
    pub count: u32,
}

/// An unassigned shift created by a manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Fields this client does not model (requirements, assignees, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// `detail` message returned by bulk assignment endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentSummary {
    #[serde(default)]
    pub detail: String,
}

/// A request to hand a shift to a colleague.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    pub id: i64,
    pub shift: i64,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: Option<String>,
}
