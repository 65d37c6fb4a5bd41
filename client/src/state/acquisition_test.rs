use super::*;
use crate::state::catalog;

struct FixedIds(u32);

impl TransactionIdSource for FixedIds {
    fn next_id(&mut self) -> String {
        let id = format_transaction_id(self.0);
        self.0 = self.0.wrapping_add(1);
        id
    }
}

fn is_transaction_id(id: &str) -> bool {
    id.len() == 8 && id.chars().all(|c| matches!(c, '0'..='9' | 'A'..='F'))
}

fn opened(id: &str) -> AcquisitionState {
    let mut state = AcquisitionState::default();
    state.open(catalog::find(id).unwrap());
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_is_closed_and_idle() {
    let state = AcquisitionState::default();
    assert!(!state.is_open());
    assert_eq!(state.step(), PurchaseStep::Idle);
    assert!(state.transaction_id().is_none());
}

#[test]
fn scan_duration_is_two_and_a_half_seconds() {
    assert_eq!(SCAN_DURATION.as_millis(), 2500);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn confirm_moves_idle_to_scanning() {
    let mut state = opened("3");
    assert!(state.confirm().is_some());
    assert_eq!(state.step(), PurchaseStep::Scanning);
}

#[test]
fn confirm_without_selection_is_rejected() {
    let mut state = AcquisitionState::default();
    assert!(state.confirm().is_none());
    assert_eq!(state.step(), PurchaseStep::Idle);
}

#[test]
fn confirm_while_scanning_has_no_effect() {
    let mut state = opened("1");
    state.confirm().unwrap();
    assert!(state.confirm().is_none());
    assert_eq!(state.step(), PurchaseStep::Scanning);
}

#[test]
fn confirm_after_complete_has_no_effect() {
    let mut state = opened("1");
    let ticket = state.confirm().unwrap();
    assert!(state.finish_scan(ticket, &mut FixedIds(1)));
    assert!(state.confirm().is_none());
    assert_eq!(state.step(), PurchaseStep::Complete);
}

#[test]
fn finish_scan_completes_with_transaction_id() {
    let mut state = opened("3");
    let ticket = state.confirm().unwrap();
    assert!(state.finish_scan(ticket, &mut FixedIds(0x00AB_12CD)));
    assert_eq!(state.step(), PurchaseStep::Complete);
    assert_eq!(state.transaction_id(), Some("00AB12CD"));
}

#[test]
fn finish_scan_requires_scanning() {
    let mut state = opened("2");
    let ticket = state.confirm().unwrap();
    assert!(state.finish_scan(ticket, &mut FixedIds(1)));
    assert!(!state.finish_scan(ticket, &mut FixedIds(2)));
    assert_eq!(state.transaction_id(), Some("00000001"));
}

#[test]
fn product_three_scenario_yields_hex_id() {
    let mut state = opened("3");
    let ticket = state.confirm().unwrap();
    assert!(state.finish_scan(ticket, &mut RandomTransactionIds));
    assert_eq!(state.step(), PurchaseStep::Complete);
    assert_eq!(state.selected().map(|p| p.id), Some("3"));
    assert!(is_transaction_id(state.transaction_id().unwrap()));
}

// =============================================================
// Reset and stale completion
// =============================================================

#[test]
fn close_resets_to_idle_and_clears_selection() {
    let mut state = opened("4");
    state.confirm().unwrap();
    state.close();
    assert!(!state.is_open());
    assert_eq!(state.step(), PurchaseStep::Idle);
}

#[test]
fn reopen_same_product_resets_completed_purchase() {
    let mut state = opened("5");
    let ticket = state.confirm().unwrap();
    state.finish_scan(ticket, &mut FixedIds(7));
    state.close();
    state.open(catalog::find("5").unwrap());
    assert_eq!(state.step(), PurchaseStep::Idle);
    assert!(state.transaction_id().is_none());
}

#[test]
fn open_other_product_resets_without_close() {
    let mut state = opened("5");
    state.confirm().unwrap();
    state.open(catalog::find("6").unwrap());
    assert_eq!(state.step(), PurchaseStep::Idle);
    assert_eq!(state.selected().map(|p| p.id), Some("6"));
}

#[test]
fn stale_ticket_after_close_is_noop() {
    let mut state = opened("1");
    let ticket = state.confirm().unwrap();
    state.close();
    assert!(!state.finish_scan(ticket, &mut FixedIds(1)));
    assert_eq!(state.step(), PurchaseStep::Idle);
    assert!(state.transaction_id().is_none());
}

#[test]
fn stale_ticket_does_not_complete_new_scan() {
    let mut state = opened("1");
    let old = state.confirm().unwrap();
    state.open(catalog::find("2").unwrap());
    let fresh = state.confirm().unwrap();
    assert!(!state.finish_scan(old, &mut FixedIds(1)));
    assert_eq!(state.step(), PurchaseStep::Scanning);
    assert!(state.finish_scan(fresh, &mut FixedIds(1)));
}

// =============================================================
// Labels and ids
// =============================================================

#[test]
fn step_labels() {
    assert_eq!(PurchaseStep::Idle.label(), "Secure Piece");
    assert_eq!(PurchaseStep::Scanning.label(), "Verifying DNA...");
    assert_eq!(PurchaseStep::Complete.label(), "Ownership Verified");
}

#[test]
fn format_transaction_id_pads_and_uppercases() {
    assert_eq!(format_transaction_id(0), "00000000");
    assert_eq!(format_transaction_id(0xdead_beef), "DEADBEEF");
    assert_eq!(format_transaction_id(u32::MAX), "FFFFFFFF");
}

#[test]
fn random_ids_match_pattern() {
    let mut ids = RandomTransactionIds;
    for _ in 0..32 {
        assert!(is_transaction_id(&ids.next_id()));
    }
}
