//! Actor domain models for role-based dashboards.
//!
//! An [`Actor`] is a point-in-time snapshot of the signed-in identity: its
//! assigned roles plus company associations. The snapshot is supplied by the
//! external identity source and passed into the authorization service; nothing
//! here performs I/O or caches state.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Assignable role tag. Roles are not mutually exclusive; a single actor may
/// hold several at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Support,
    Supervisor,
    User,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Support => write!(f, "support"),
            Role::Supervisor => write!(f, "supervisor"),
            Role::User => write!(f, "user"),
        }
    }
}

impl Role {
    /// Lenient parse for role tags coming from the identity source.
    ///
    /// Unrecognized tags yield `None`; callers drop them rather than fail,
    /// since an absent role list already degrades to the default user role.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "admin" => Some(Role::Admin),
            "support" => Some(Role::Support),
            "supervisor" => Some(Role::Supervisor),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

/// Snapshot of the authenticated identity used by the authorization service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Actor {
    pub id: Uuid,
    /// Assigned roles; empty means the actor defaults to a plain user.
    pub roles: Vec<Role>,
    /// Company the actor's own profile belongs to, if any.
    pub primary_company_id: Option<Uuid>,
    /// Companies the actor services as an attendant. Populated only for
    /// support-role actors with explicit assignments; empty otherwise.
    pub attendant_company_ids: Vec<Uuid>,
}

impl Actor {
    /// Create an actor snapshot with no roles and no company associations.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            roles: Vec::new(),
            primary_company_id: None,
            attendant_company_ids: Vec::new(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// Derived role flags driving dashboard visibility.
///
/// Independent booleans: an actor can be simultaneously admin and attendant.
/// Attendant status is derived from company assignments, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RoleFlags {
    pub is_admin: bool,
    pub is_support: bool,
    pub is_supervisor: bool,
    pub is_user: bool,
    pub is_attendant: bool,
}
