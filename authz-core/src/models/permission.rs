//! Permission identifiers and the caller's granted set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Permission identifiers granted by the auth backend.
pub mod permissions {
    /// Create new invoices.
    pub const CREATE_INVOICE: &str = "create-invoice";

    /// Edit draft, tax-generated, and rejected invoices.
    pub const EDIT_INVOICE: &str = "edit-invoice";

    /// Submit invoices for approval.
    pub const SUBMIT_INVOICE: &str = "submit-invoice";

    /// Approve submitted invoices and mark approved ones paid.
    pub const APPROVE_PAYMENT: &str = "approve-payment";

    /// Reject submitted or approved invoices.
    pub const REJECT_INVOICE: &str = "reject-invoice";

    /// View the invoice audit trail.
    pub const VIEW_AUDIT_TRAIL: &str = "view-audit-trail";

    /// Manage portal users.
    pub const MANAGE_USERS: &str = "manage-users";
}

/// The set of permission identifiers held by the current caller.
///
/// Supplied by the session layer and read-only here. Always passed
/// explicitly; an empty set is an ordinary value, not an error. Membership
/// is exact string match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(BTreeSet<String>);

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact-match membership check, the single-permission UI gate.
    pub fn has(&self, permission: &str) -> bool {
        self.0.contains(permission)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
