//! Ticket domain models and SLA classification types.
//!
//! A [`Ticket`] here is the SLA-relevant projection of a help-desk ticket:
//! criticality, the two pre-computed deadlines and the two event timestamps.
//! Deadline generation happens upstream; this layer only classifies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::{validate_deadline_order, validate_not_blank, validate_not_future};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Ticket criticality assigned at creation. Drives the SLA deadlines computed
/// upstream and maps onto the legacy priority field kept for older dashboards.
///
/// Serde keys are the exact product tags (Portuguese, case-sensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Criticality {
    #[serde(rename = "muito_alta")]
    MuitoAlta,
    #[serde(rename = "alta")]
    Alta,
    #[serde(rename = "moderada")]
    Moderada,
    #[serde(rename = "padrao")]
    Padrao,
    #[serde(rename = "geral")]
    Geral,
}

impl std::fmt::Display for Criticality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Criticality::MuitoAlta => write!(f, "muito_alta"),
            Criticality::Alta => write!(f, "alta"),
            Criticality::Moderada => write!(f, "moderada"),
            Criticality::Padrao => write!(f, "padrao"),
            Criticality::Geral => write!(f, "geral"),
        }
    }
}

impl Criticality {
    /// Strict parse of a criticality tag. Keys are case-sensitive.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "muito_alta" => Some(Criticality::MuitoAlta),
            "alta" => Some(Criticality::Alta),
            "moderada" => Some(Criticality::Moderada),
            "padrao" => Some(Criticality::Padrao),
            "geral" => Some(Criticality::Geral),
            _ => None,
        }
    }

    /// Fixed mapping onto the legacy priority field.
    pub fn priority(&self) -> Priority {
        match self {
            Criticality::MuitoAlta => Priority::Urgent,
            Criticality::Alta => Priority::High,
            Criticality::Moderada => Priority::Medium,
            Criticality::Padrao => Priority::Medium,
            Criticality::Geral => Priority::Low,
        }
    }
}

/// Legacy priority kept for older dashboards and exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Urgent => write!(f, "urgent"),
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Total criticality-tag-to-priority mapping for loosely-typed upstream data.
///
/// Unrecognized tags fall back to `Medium`, matching the legacy behavior of
/// the string-keyed lookup table this replaces.
pub fn priority_for_tag(tag: &str) -> Priority {
    Criticality::parse(tag)
        .map(|c| c.priority())
        .unwrap_or(Priority::Medium)
}

/// SLA compliance state of a ticket at a given instant.
///
/// With `solved_at` unset, time only moves a ticket forward through
/// within -> near -> overdue against a single deadline; `Completed` is
/// reachable from any state and terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlaStatus {
    WithinDeadline,
    NearResponseDeadline,
    NearSolutionDeadline,
    OverdueResponse,
    OverdueSolution,
    Completed,
    /// A required deadline is missing from the projection; render as "N/A".
    Unknown,
}

impl std::fmt::Display for SlaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlaStatus::WithinDeadline => write!(f, "within_deadline"),
            SlaStatus::NearResponseDeadline => write!(f, "near_response_deadline"),
            SlaStatus::NearSolutionDeadline => write!(f, "near_solution_deadline"),
            SlaStatus::OverdueResponse => write!(f, "overdue_response"),
            SlaStatus::OverdueSolution => write!(f, "overdue_solution"),
            SlaStatus::Completed => write!(f, "completed"),
            SlaStatus::Unknown => write!(f, "unknown"),
        }
    }
}

impl SlaStatus {
    pub fn is_overdue(&self) -> bool {
        matches!(self, SlaStatus::OverdueResponse | SlaStatus::OverdueSolution)
    }

    /// Terminal states admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SlaStatus::Completed)
    }

    /// Badge label shown by the presentation layer.
    pub fn label(&self) -> &'static str {
        match self {
            SlaStatus::WithinDeadline => "No prazo",
            SlaStatus::NearResponseDeadline => "Resposta próxima do prazo",
            SlaStatus::NearSolutionDeadline => "Solução próxima do prazo",
            SlaStatus::OverdueResponse => "Resposta atrasada",
            SlaStatus::OverdueSolution => "Solução atrasada",
            SlaStatus::Completed => "Concluído",
            SlaStatus::Unknown => "N/A",
        }
    }
}

/// SLA-relevant projection of a ticket.
///
/// Deadlines are optional at the type level: malformed upstream records must
/// degrade to an unknown status instead of crashing a render path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Ticket {
    pub id: Uuid,
    pub company_id: Uuid,
    pub criticality: Criticality,
    pub created_at: DateTime<Utc>,
    pub response_deadline: Option<DateTime<Utc>>,
    pub solution_deadline: Option<DateTime<Utc>>,
    /// Set once by the first qualifying response; never cleared.
    pub first_response_at: Option<DateTime<Utc>>,
    /// Set once at resolution; never cleared.
    pub solved_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Legacy priority derived from criticality.
    pub fn priority(&self) -> Priority {
        self.criticality.priority()
    }
}

/// Request payload for the ticket-creation dialog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateTicketRequest {
    pub company_id: Uuid,
    #[validate(
        length(min = 1, max = 120, message = "Subject must be 1-120 characters"),
        custom(function = "validate_not_blank")
    )]
    pub subject: String,
    #[validate(length(max = 4000, message = "Description must be at most 4000 characters"))]
    pub description: Option<String>,
    pub criticality: Criticality,
}

/// Request payload for the ticket-edit dialog.
///
/// All fields are optional; only supplied fields change. Cross-field
/// timestamp rules the derive cannot express live in
/// [`UpdateTicketRequest::validate_timestamps`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct UpdateTicketRequest {
    #[validate(
        length(min = 1, max = 120, message = "Subject must be 1-120 characters"),
        custom(function = "validate_not_blank")
    )]
    pub subject: Option<String>,
    #[validate(length(max = 4000, message = "Description must be at most 4000 characters"))]
    pub description: Option<String>,
    pub criticality: Option<Criticality>,
    pub response_deadline: Option<DateTime<Utc>>,
    pub solution_deadline: Option<DateTime<Utc>>,
    pub first_response_at: Option<DateTime<Utc>>,
    pub solved_at: Option<DateTime<Utc>>,
}

impl UpdateTicketRequest {
    /// Cross-field timestamp checks for the edit form.
    ///
    /// `now` is an explicit parameter so the form layer stays deterministic;
    /// event timestamps may not sit in the future beyond clock-skew tolerance
    /// and a supplied deadline pair must not be inverted.
    pub fn validate_timestamps(&self, now: DateTime<Utc>) -> Result<(), ValidationError> {
        if let (Some(response), Some(solution)) = (self.response_deadline, self.solution_deadline)
        {
            validate_deadline_order(response, solution)?;
        }
        if let Some(first_response) = self.first_response_at {
            validate_not_future(first_response, now)?;
        }
        if let Some(solved) = self.solved_at {
            validate_not_future(solved, now)?;
        }
        Ok(())
    }
}
