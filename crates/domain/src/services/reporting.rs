//! Ticket report generation.
//!
//! Pure export formatting over in-memory ticket slices: the presentation
//! layer filters tickets, asks for rows, and owns the actual download. CSV
//! and JSON renderers plus the per-status summary feeding dashboard widgets.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::models::{Actor, SlaStatus, Ticket};
use crate::services::authorization::can_view_tickets;
use crate::services::sla::{
    compute_status, format_time_remaining, time_remaining, SlaSnapshot, SlaThresholds,
};

/// Report generation errors.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Report export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "csv" => ReportFormat::Csv,
            _ => ReportFormat::Json, // Default to JSON
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
        }
    }
}

/// Flat ticket row for export.
#[derive(Debug, Serialize)]
pub struct TicketReportRow {
    pub ticket_id: String,
    pub company_id: String,
    pub criticality: String,
    pub priority: String,
    pub sla_status: String,
    pub time_remaining: String,
    pub created_at: String,
    pub first_response_at: String,
    pub solved_at: String,
}

/// Per-status ticket counts for dashboard widgets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct StatusSummary {
    pub within_deadline: usize,
    pub near_deadline: usize,
    pub overdue: usize,
    pub completed: usize,
    pub unknown: usize,
}

fn format_optional(ts: Option<DateTime<Utc>>) -> String {
    ts.map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
        .unwrap_or_default()
}

/// Project tickets into export rows, classifying each against `now`.
pub fn build_rows(tickets: &[Ticket], now: DateTime<Utc>, thresholds: &SlaThresholds) -> Vec<TicketReportRow> {
    tickets
        .iter()
        .map(|ticket| {
            let snapshot = SlaSnapshot::from(ticket);
            let status = compute_status(now, &snapshot, thresholds);
            let remaining = match time_remaining(now, &snapshot) {
                Some(delta) => format_time_remaining(delta),
                None => "N/A".to_string(),
            };

            TicketReportRow {
                ticket_id: ticket.id.to_string(),
                company_id: ticket.company_id.to_string(),
                criticality: ticket.criticality.to_string(),
                priority: ticket.priority().to_string(),
                sla_status: status.to_string(),
                time_remaining: remaining,
                created_at: ticket.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
                first_response_at: format_optional(ticket.first_response_at),
                solved_at: format_optional(ticket.solved_at),
            }
        })
        .collect()
}

/// Render export rows in the requested format.
pub fn render(rows: &[TicketReportRow], format: ReportFormat) -> Result<String, ReportError> {
    match format {
        ReportFormat::Json => to_json(rows),
        ReportFormat::Csv => Ok(to_csv(rows)),
    }
}

/// Count tickets per SLA status bucket.
pub fn summarize(tickets: &[Ticket], now: DateTime<Utc>, thresholds: &SlaThresholds) -> StatusSummary {
    let mut summary = StatusSummary::default();

    for ticket in tickets {
        let snapshot = SlaSnapshot::from(ticket);
        match compute_status(now, &snapshot, thresholds) {
            SlaStatus::WithinDeadline => summary.within_deadline += 1,
            SlaStatus::NearResponseDeadline | SlaStatus::NearSolutionDeadline => {
                summary.near_deadline += 1
            }
            SlaStatus::OverdueResponse | SlaStatus::OverdueSolution => summary.overdue += 1,
            SlaStatus::Completed => summary.completed += 1,
            SlaStatus::Unknown => summary.unknown += 1,
        }
    }

    summary
}

/// Retain only the tickets whose company the actor may view.
pub fn filter_visible<'a>(tickets: &'a [Ticket], actor: &Actor) -> Vec<&'a Ticket> {
    tickets
        .iter()
        .filter(|ticket| can_view_tickets(actor, Some(ticket.company_id)))
        .collect()
}

fn to_json(rows: &[TicketReportRow]) -> Result<String, ReportError> {
    serde_json::to_string_pretty(rows).map_err(ReportError::from)
}

fn to_csv(rows: &[TicketReportRow]) -> String {
    let mut csv = String::new();
    csv.push_str(
        "ticket_id,company_id,criticality,priority,sla_status,time_remaining,created_at,first_response_at,solved_at\n",
    );

    for row in rows {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            row.ticket_id,
            row.company_id,
            row.criticality,
            row.priority,
            row.sla_status,
            row.time_remaining,
            row.created_at,
            row.first_response_at,
            row.solved_at
        ));
    }

    csv
}
