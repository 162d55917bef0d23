//! Role names used for coarse UI gating.
//!
//! Roles never feed action resolution; that depends solely on permissions
//! and status. They only gate whole sections of the portal (sidebars, admin
//! menus).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Conventional role names assigned by the auth backend.
pub mod roles {
    pub const ADMIN: &str = "Admin";
    pub const PROCUREMENT: &str = "Procurement";
    pub const FINANCE: &str = "Finance";
    pub const VIEWER: &str = "Viewer";
}

/// The set of role names held by the current caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<String>);

impl RoleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.0.contains(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(roles::ADMIN)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RoleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
