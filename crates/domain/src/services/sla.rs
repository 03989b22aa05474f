//! SLA status calculation service.
//!
//! Classifies a ticket's time-compliance state against its response and
//! solution deadlines and renders display-ready remaining-time strings.
//!
//! Everything here is a pure function: `now` is always an explicit parameter
//! so results are deterministic and the presentation layer can recompute on
//! every render without caching.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::config::SlaConfig;
use crate::models::{SlaStatus, Ticket};

/// Near-deadline warning band.
///
/// The effective threshold for a given ticket is the lesser of an absolute
/// lookahead window and a fraction of the ticket's total SLA window. Both
/// knobs come from configuration; neither is a product constant.
#[derive(Debug, Clone, PartialEq)]
pub struct SlaThresholds {
    /// Absolute lookahead before a deadline counts as near.
    pub near_window: Duration,
    /// Fraction of the total allotted time that counts as near.
    pub near_fraction: f64,
}

impl SlaThresholds {
    pub fn new(near_window: Duration, near_fraction: f64) -> Self {
        Self {
            near_window,
            near_fraction,
        }
    }

    pub fn from_config(config: &SlaConfig) -> Self {
        Self {
            near_window: Duration::hours(config.near_window_hours),
            near_fraction: config.near_fraction,
        }
    }

    /// Effective warning band for a ticket whose total SLA window is known.
    ///
    /// With no usable total window the absolute lookahead applies alone.
    fn effective(&self, total_window: Option<Duration>) -> Duration {
        match total_window {
            Some(total) if total > Duration::zero() => {
                let fractional =
                    Duration::seconds((total.num_seconds() as f64 * self.near_fraction) as i64);
                fractional.min(self.near_window)
            }
            _ => self.near_window,
        }
    }
}

impl Default for SlaThresholds {
    fn default() -> Self {
        Self {
            near_window: Duration::hours(4),
            near_fraction: 0.20,
        }
    }
}

/// SLA-relevant timestamps of a single ticket.
///
/// All fields are optional so a malformed upstream record degrades to
/// [`SlaStatus::Unknown`] instead of crashing a render path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlaSnapshot {
    pub created_at: Option<DateTime<Utc>>,
    pub response_deadline: Option<DateTime<Utc>>,
    pub solution_deadline: Option<DateTime<Utc>>,
    pub first_response_at: Option<DateTime<Utc>>,
    pub solved_at: Option<DateTime<Utc>>,
}

impl From<&Ticket> for SlaSnapshot {
    fn from(ticket: &Ticket) -> Self {
        Self {
            created_at: Some(ticket.created_at),
            response_deadline: ticket.response_deadline,
            solution_deadline: ticket.solution_deadline,
            first_response_at: ticket.first_response_at,
            solved_at: ticket.solved_at,
        }
    }
}

impl SlaSnapshot {
    /// The deadline currently governing the ticket.
    ///
    /// Until the first response lands the response deadline applies; after
    /// that the clock shifts to the solution deadline.
    fn active_deadline(&self) -> Option<DateTime<Utc>> {
        if self.first_response_at.is_none() {
            self.response_deadline
        } else {
            self.solution_deadline
        }
    }

    fn awaiting_first_response(&self) -> bool {
        self.first_response_at.is_none()
    }
}

/// Classify a ticket's SLA state at `now`.
///
/// Transitions are forward-only against a single deadline
/// (within -> near -> overdue); `Completed` wins from any state once
/// `solved_at` is set and is terminal. A missing required deadline yields
/// `Unknown`, never a panic.
pub fn compute_status(
    now: DateTime<Utc>,
    snapshot: &SlaSnapshot,
    thresholds: &SlaThresholds,
) -> SlaStatus {
    if snapshot.solved_at.is_some() {
        return SlaStatus::Completed;
    }

    let Some(deadline) = snapshot.active_deadline() else {
        debug!("SLA snapshot missing active deadline, status unknown");
        return SlaStatus::Unknown;
    };

    let awaiting = snapshot.awaiting_first_response();
    let remaining = deadline - now;

    if remaining < Duration::zero() {
        return if awaiting {
            SlaStatus::OverdueResponse
        } else {
            SlaStatus::OverdueSolution
        };
    }

    let total_window = snapshot.created_at.map(|created| deadline - created);
    if remaining <= thresholds.effective(total_window) {
        return if awaiting {
            SlaStatus::NearResponseDeadline
        } else {
            SlaStatus::NearSolutionDeadline
        };
    }

    SlaStatus::WithinDeadline
}

/// Remaining time against the active deadline.
///
/// `None` once the ticket is solved or when the required deadline is missing;
/// negative durations mean the deadline has lapsed.
pub fn time_remaining(now: DateTime<Utc>, snapshot: &SlaSnapshot) -> Option<Duration> {
    if snapshot.solved_at.is_some() {
        return None;
    }
    snapshot.active_deadline().map(|deadline| deadline - now)
}

/// Render a signed remaining duration as a display string.
///
/// Lapsed deadlines render as "atrasado"; non-negative durations render the
/// two largest units ("2d 4h", "4h 30min", "45min"). Zero is a boundary, not
/// a lapse, and renders as "0min".
pub fn format_time_remaining(remaining: Duration) -> String {
    if remaining < Duration::zero() {
        return "atrasado".to_string();
    }

    let total_minutes = remaining.num_minutes();
    let days = total_minutes / (24 * 60);
    let hours = (total_minutes % (24 * 60)) / 60;
    let minutes = total_minutes % 60;

    if days > 0 {
        if hours > 0 {
            format!("{}d {}h", days, hours)
        } else {
            format!("{}d", days)
        }
    } else if hours > 0 {
        if minutes > 0 {
            format!("{}h {}min", hours, minutes)
        } else {
            format!("{}h", hours)
        }
    } else {
        format!("{}min", minutes)
    }
}
