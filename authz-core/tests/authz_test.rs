//! Action resolution tests: the full decision table, terminal and
//! fail-closed invariants, and the write gate.

use authz_core::{
    can_write_invoices, permissions, permitted_actions, Action, Invoice, InvoiceStatus,
    PermissionSet,
};

const ACTION_PERMISSIONS: [&str; 5] = [
    permissions::CREATE_INVOICE,
    permissions::EDIT_INVOICE,
    permissions::SUBMIT_INVOICE,
    permissions::APPROVE_PAYMENT,
    permissions::REJECT_INVOICE,
];

fn invoice(status: &str) -> Invoice {
    Invoice {
        status: Some(status.to_string()),
        ..Invoice::default()
    }
}

/// Build the permission subset selected by `mask` over ACTION_PERMISSIONS.
fn subset(mask: usize) -> PermissionSet {
    ACTION_PERMISSIONS
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, p)| *p)
        .collect()
}

/// Independent statement of the decision table, used to cross-check the
/// resolver over every (status, permission subset) combination.
fn expected(status: &InvoiceStatus, granted: &PermissionSet) -> Vec<Action> {
    let mut actions = Vec::new();
    match status {
        InvoiceStatus::Draft | InvoiceStatus::Rejected => {
            if granted.has(permissions::EDIT_INVOICE) {
                actions.push(Action::Edit);
            }
        }
        InvoiceStatus::TaxGenerated => {
            if granted.has(permissions::EDIT_INVOICE) {
                actions.push(Action::Edit);
            }
            if granted.has(permissions::SUBMIT_INVOICE) {
                actions.push(Action::Submit);
            }
        }
        InvoiceStatus::Submitted => {
            if granted.has(permissions::APPROVE_PAYMENT) {
                actions.push(Action::Approve);
            }
            if granted.has(permissions::REJECT_INVOICE) {
                actions.push(Action::Reject);
            }
        }
        InvoiceStatus::Approved => {
            if granted.has(permissions::APPROVE_PAYMENT) {
                actions.push(Action::MarkPaid);
            }
            if granted.has(permissions::REJECT_INVOICE) {
                actions.push(Action::Reject);
            }
        }
        InvoiceStatus::Paid | InvoiceStatus::Unknown(_) => {}
    }
    actions
}

#[test]
fn decision_table_holds_for_every_status_and_permission_subset() {
    for status in InvoiceStatus::KNOWN {
        for mask in 0..(1usize << ACTION_PERMISSIONS.len()) {
            let granted = subset(mask);
            let actual = permitted_actions(&invoice(status.as_str()), &granted);
            assert_eq!(
                actual,
                expected(&status, &granted),
                "status={status} mask={mask:#07b}"
            );
        }
    }
}

#[test]
fn paid_is_terminal_under_every_permission_set() {
    let everything: PermissionSet = [
        permissions::CREATE_INVOICE,
        permissions::EDIT_INVOICE,
        permissions::SUBMIT_INVOICE,
        permissions::APPROVE_PAYMENT,
        permissions::REJECT_INVOICE,
        permissions::VIEW_AUDIT_TRAIL,
        permissions::MANAGE_USERS,
    ]
    .into_iter()
    .collect();

    assert!(permitted_actions(&invoice("Paid"), &everything).is_empty());

    for mask in 0..(1usize << ACTION_PERMISSIONS.len()) {
        assert!(permitted_actions(&invoice("Paid"), &subset(mask)).is_empty());
    }
}

#[test]
fn missing_status_resolves_to_no_actions() {
    let granted: PermissionSet = ACTION_PERMISSIONS.into_iter().collect();
    assert!(permitted_actions(&Invoice::default(), &granted).is_empty());

    let no_status = Invoice {
        status: None,
        ..Invoice::default()
    };
    assert!(permitted_actions(&no_status, &granted).is_empty());
}

#[test]
fn unknown_status_fails_closed() {
    let granted: PermissionSet = ["approve-payment", "edit-invoice"].into_iter().collect();
    assert!(permitted_actions(&invoice("Unknown"), &granted).is_empty());
    assert!(permitted_actions(&invoice(""), &granted).is_empty());
    assert!(permitted_actions(&invoice("draft"), &granted).is_empty());
}

#[test]
fn resolution_is_idempotent() {
    let inv = invoice("Tax Generated");
    let granted: PermissionSet = ["edit-invoice", "submit-invoice"].into_iter().collect();
    let first = permitted_actions(&inv, &granted);
    let second = permitted_actions(&inv, &granted);
    assert_eq!(first, second);
    assert_eq!(first, [Action::Edit, Action::Submit]);
}

#[test]
fn tax_generated_scenarios() {
    let edit_only: PermissionSet = ["edit-invoice"].into_iter().collect();
    assert_eq!(
        permitted_actions(&invoice("Tax Generated"), &edit_only),
        [Action::Edit]
    );

    let submit_only: PermissionSet = ["submit-invoice"].into_iter().collect();
    assert_eq!(
        permitted_actions(&invoice("Tax Generated"), &submit_only),
        [Action::Submit]
    );

    let both: PermissionSet = ["edit-invoice", "submit-invoice"].into_iter().collect();
    assert_eq!(
        permitted_actions(&invoice("Tax Generated"), &both),
        [Action::Edit, Action::Submit]
    );
}

#[test]
fn approved_scenario() {
    let granted: PermissionSet = ["approve-payment", "reject-invoice"].into_iter().collect();
    assert_eq!(
        permitted_actions(&invoice("Approved"), &granted),
        [Action::MarkPaid, Action::Reject]
    );
}

#[test]
fn rejected_scenario() {
    let edit_only: PermissionSet = ["edit-invoice"].into_iter().collect();
    assert_eq!(
        permitted_actions(&invoice("Rejected"), &edit_only),
        [Action::Edit]
    );
    assert!(permitted_actions(&invoice("Rejected"), &PermissionSet::new()).is_empty());
}

#[test]
fn write_gate_requires_a_write_permission() {
    for p in [
        permissions::CREATE_INVOICE,
        permissions::EDIT_INVOICE,
        permissions::SUBMIT_INVOICE,
        permissions::APPROVE_PAYMENT,
    ] {
        let granted: PermissionSet = [p].into_iter().collect();
        assert!(can_write_invoices(&granted), "{p} should open the gate");
    }

    for p in [
        permissions::REJECT_INVOICE,
        permissions::VIEW_AUDIT_TRAIL,
        permissions::MANAGE_USERS,
    ] {
        let granted: PermissionSet = [p].into_iter().collect();
        assert!(!can_write_invoices(&granted), "{p} should not open the gate");
    }
}
