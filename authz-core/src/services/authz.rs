//! Invoice action resolution.
//!
//! The rule tables below are the single source of truth for which
//! permission unlocks which action in each lifecycle status. Evaluation is
//! fail-closed: a status outside the tables resolves to no actions.

use tracing::debug;

use crate::models::{permissions, Action, Invoice, InvoiceStatus, PermissionSet};

/// One decision-table row: holding `requires` offers `grants`.
#[derive(Debug, Clone, Copy)]
struct ActionRule {
    requires: &'static str,
    grants: Action,
}

const DRAFT_RULES: &[ActionRule] = &[ActionRule {
    requires: permissions::EDIT_INVOICE,
    grants: Action::Edit,
}];

const TAX_GENERATED_RULES: &[ActionRule] = &[
    ActionRule {
        requires: permissions::EDIT_INVOICE,
        grants: Action::Edit,
    },
    ActionRule {
        requires: permissions::SUBMIT_INVOICE,
        grants: Action::Submit,
    },
];

const SUBMITTED_RULES: &[ActionRule] = &[
    ActionRule {
        requires: permissions::APPROVE_PAYMENT,
        grants: Action::Approve,
    },
    ActionRule {
        requires: permissions::REJECT_INVOICE,
        grants: Action::Reject,
    },
];

const APPROVED_RULES: &[ActionRule] = &[
    ActionRule {
        requires: permissions::APPROVE_PAYMENT,
        grants: Action::MarkPaid,
    },
    ActionRule {
        requires: permissions::REJECT_INVOICE,
        grants: Action::Reject,
    },
];

const REJECTED_RULES: &[ActionRule] = &[ActionRule {
    requires: permissions::EDIT_INVOICE,
    grants: Action::Edit,
}];

fn rules_for(status: &InvoiceStatus) -> &'static [ActionRule] {
    match status {
        InvoiceStatus::Draft => DRAFT_RULES,
        InvoiceStatus::TaxGenerated => TAX_GENERATED_RULES,
        InvoiceStatus::Submitted => SUBMITTED_RULES,
        InvoiceStatus::Approved => APPROVED_RULES,
        InvoiceStatus::Rejected => REJECTED_RULES,
        // Paid is terminal; everything else fails closed.
        InvoiceStatus::Paid | InvoiceStatus::Unknown(_) => &[],
    }
}

/// Resolve the actions the caller may be offered on `invoice`.
///
/// Pure and deterministic: the same (status, permission set) pair always
/// yields the same ordered action list. A missing or unrecognized status
/// yields an empty list rather than an error.
pub fn permitted_actions(invoice: &Invoice, granted: &PermissionSet) -> Vec<Action> {
    let status = invoice.status_enum();
    if let InvoiceStatus::Unknown(raw) = &status {
        debug!(status = %raw, "unrecognized invoice status, resolving no actions");
    }
    rules_for(&status)
        .iter()
        .filter(|rule| granted.has(rule.requires))
        .map(|rule| rule.grants)
        .collect()
}

/// Coarse write gate: whether the caller can perform any invoice write at
/// all, independent of a specific invoice. Decides whether to show
/// write-oriented affordances in the first place.
pub fn can_write_invoices(granted: &PermissionSet) -> bool {
    const WRITE_PERMISSIONS: [&str; 4] = [
        permissions::CREATE_INVOICE,
        permissions::EDIT_INVOICE,
        permissions::SUBMIT_INVOICE,
        permissions::APPROVE_PAYMENT,
    ];
    WRITE_PERMISSIONS.iter().any(|p| granted.has(p))
}
