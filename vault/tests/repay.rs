use multiversx_sc::types::BigUint;
use nft_vault::{ERROR_INVALID_AMOUNT, ERROR_INVALID_POSITION, ERROR_UNAUTHORIZED};

pub mod constants;
pub mod setup;
use constants::*;
use setup::*;

#[test]
fn partial_repay_reduces_debt() {
    let mut state = VaultTestState::new();

    state.borrow(&HOLDER_ADDRESS, 1, wad(16), false, true);
    state.repay(&HOLDER_ADDRESS, 1, wad(6));

    assert_eq!(state.get_debt_amount(1), wad(10));
    let position = state.get_position(1);
    assert_eq!(position.debt_principal, wad(10));

    state.check_stable_balance(
        &HOLDER_ADDRESS.to_managed_address(),
        wad(1_000) + wad_fraction(1_592, 100) - wad(6),
    );
    state.assert_debt_conservation();
}

#[test]
fn repay_refunds_excess() {
    let mut state = VaultTestState::new();

    state.borrow(&HOLDER_ADDRESS, 1, wad(10), false, true);
    state.repay(&HOLDER_ADDRESS, 1, wad(25));

    assert_eq!(state.get_debt_amount(1), BigUint::zero());
    // 9.95 received, 10 paid back
    state.check_stable_balance(
        &HOLDER_ADDRESS.to_managed_address(),
        wad(1_000) - wad_fraction(5, 100),
    );

    let totals = state.get_ledger_totals();
    assert_eq!(totals.total_debt_amount, BigUint::zero());
    assert_eq!(totals.total_debt_principal, BigUint::zero());
    assert_eq!(totals.total_debt_portion, BigUint::zero());
}

#[test]
fn repay_without_debt_fails() {
    let mut state = VaultTestState::new();

    state.borrow(&HOLDER_ADDRESS, 1, wad(10), false, true);
    state.repay(&HOLDER_ADDRESS, 1, wad(10));

    state.repay_error(&HOLDER_ADDRESS, 1, wad(1), ERROR_INVALID_AMOUNT);
}

#[test]
fn repay_by_non_holder_fails() {
    let mut state = VaultTestState::new();

    state.borrow(&HOLDER_ADDRESS, 1, wad(10), false, true);
    state.repay_error(&OTHER_ADDRESS, 1, wad(1), ERROR_UNAUTHORIZED);
}

#[test]
fn repay_unknown_position_fails() {
    let mut state = VaultTestState::new();

    state.repay_error(&HOLDER_ADDRESS, 2, wad(1), ERROR_INVALID_POSITION);
}

#[test]
fn close_with_debt_reports_owed_amount() {
    let mut state = VaultTestState::new();

    state.borrow(&HOLDER_ADDRESS, 1, wad(16), false, true);

    let message = format!("Non-zero debt: {}", 16 * WAD);
    state.close_position_error(&HOLDER_ADDRESS, 1, &message);
}

/// Full lifecycle of a position.
///
/// Covers:
/// - Interest owed after a year is part of what must be repaid
/// - Closing returns the item and removes every index entry
#[test]
fn repay_with_interest_then_close() {
    let mut state = VaultTestState::new();

    state.borrow(&HOLDER_ADDRESS, 1, wad(16), false, true);
    state.change_timestamp(BASE_TIMESTAMP + SECONDS_PER_YEAR);

    let interest = state.get_debt_interest(1);
    assert!(interest > BigUint::zero());
    let owed = state.get_debt_amount(1);
    assert_eq!(owed, wad(16) + interest.clone());

    // Principal alone is not enough
    state.repay(&HOLDER_ADDRESS, 1, wad(16));
    let remaining = state.get_debt_amount(1);
    assert_eq!(remaining, interest);
    let message = format!("Non-zero debt: {}", remaining.to_u64().unwrap());
    state.close_position_error(&HOLDER_ADDRESS, 1, &message);

    state.repay(&HOLDER_ADDRESS, 1, wad(2));
    assert_eq!(state.get_debt_amount(1), BigUint::zero());

    state.close_position(&HOLDER_ADDRESS, 1);
    state.check_item_owner(&HOLDER_ADDRESS.to_managed_address(), 1);
    assert_eq!(state.total_positions(), 0);
    assert!(state.get_holder_positions(&HOLDER_ADDRESS).is_empty());

    let totals = state.get_ledger_totals();
    assert_eq!(totals.total_debt_principal, BigUint::zero());
    assert_eq!(totals.total_debt_portion, BigUint::zero());
}

#[test]
fn close_by_non_holder_fails() {
    let mut state = VaultTestState::new();

    state.borrow(&HOLDER_ADDRESS, 1, wad(1), false, true);
    state.repay(&HOLDER_ADDRESS, 1, wad(1));

    state.close_position_error(&OTHER_ADDRESS, 1, "Unauthorized.");
    state.close_position(&HOLDER_ADDRESS, 1);
}

#[test]
fn reopen_after_close() {
    let mut state = VaultTestState::new();

    state.borrow(&HOLDER_ADDRESS, 1, wad(5), true, true);
    state.repay(&HOLDER_ADDRESS, 1, wad(5));
    state.close_position(&HOLDER_ADDRESS, 1);

    state.borrow(&HOLDER_ADDRESS, 1, wad(5), false, true);
    assert!(!state.get_position(1).insured);
    assert_eq!(state.get_debt_amount(1), wad(5));
}
