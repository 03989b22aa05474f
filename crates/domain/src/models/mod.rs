//! Domain models for the help-desk rules core.

pub mod actor;
pub mod company;
pub mod ticket;

pub use actor::{Actor, Role, RoleFlags};
pub use company::{Company, CreateCompanyRequest};
pub use ticket::{
    priority_for_tag, CreateTicketRequest, Criticality, Priority, SlaStatus, Ticket,
    UpdateTicketRequest,
};
