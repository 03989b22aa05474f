//! Authorization service: role-flag derivation and ticket visibility.
//!
//! Pure functions over an [`Actor`] snapshot. The snapshot is fetched and
//! refreshed by the embedding application; nothing here performs I/O, so the
//! presentation layer can safely re-evaluate on every render.

use tracing::debug;
use uuid::Uuid;

use crate::models::{Actor, Role, RoleFlags};

/// Derive the dashboard role flags from an actor snapshot.
///
/// Flags are independent of each other. An empty role list degrades to the
/// default user role; no other flag is set implicitly.
pub fn derive_flags(actor: &Actor) -> RoleFlags {
    RoleFlags {
        is_admin: actor.has_role(Role::Admin),
        is_support: actor.has_role(Role::Support),
        is_supervisor: actor.has_role(Role::Supervisor),
        is_user: actor.has_role(Role::User) || actor.roles.is_empty(),
        is_attendant: !actor.attendant_company_ids.is_empty(),
    }
}

/// Can this actor view tickets belonging to `company_id`?
///
/// Rules are evaluated in priority order; the first match wins:
/// 1. Admin bypasses all company scoping.
/// 2. Support with no attendant assignments is global support. Legacy rule,
///    kept even though it overlaps with admin.
/// 3. An unscoped query (no company id) requires one of the elevated cases
///    above; everyone else is denied.
/// 4. Supervisors see only their own company.
/// 5. Attendants see only explicitly assigned companies.
///
/// Denial is a valid negative result, not an error; callers hide the
/// corresponding UI or query instead of surfacing a message.
pub fn can_view_tickets(actor: &Actor, company_id: Option<Uuid>) -> bool {
    let flags = derive_flags(actor);

    if flags.is_admin {
        return true;
    }

    if flags.is_support && !flags.is_attendant {
        return true;
    }

    let Some(company_id) = company_id else {
        debug!(actor_id = %actor.id, "Unscoped ticket query denied without elevated role");
        return false;
    };

    if flags.is_supervisor && actor.primary_company_id == Some(company_id) {
        return true;
    }

    if flags.is_attendant && actor.attendant_company_ids.contains(&company_id) {
        return true;
    }

    debug!(actor_id = %actor.id, company_id = %company_id, "Ticket visibility denied");
    false
}
