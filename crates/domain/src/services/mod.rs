//! Domain services for the help-desk rules core.
//!
//! Services contain the branching logic that operates on domain models.

pub mod authorization;
pub mod listing;
pub mod reporting;
pub mod sla;

pub use authorization::{can_view_tickets, derive_flags};

pub use listing::{page_tickets, TicketPage};

pub use sla::{
    compute_status, format_time_remaining, time_remaining, SlaSnapshot, SlaThresholds,
};

pub use reporting::{
    build_rows, filter_visible, render, summarize, ReportError, ReportFormat, StatusSummary,
    TicketReportRow,
};
