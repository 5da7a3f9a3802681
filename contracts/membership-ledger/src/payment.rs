//! Boundary to the token collaborator.
//!
//! The ledger never holds funds: it moves them as an approved spender with
//! `transfer_from`, so every payer must have called `approve` on the token
//! naming this contract beforehand.

use crate::errors::Error;
use soroban_sdk::{token, Address, Env};

/// Move `amount` of `token` from `from` to `to` using this contract's
/// allowance. A rejection by the token (balance, allowance, bad amount)
/// comes back as [`Error::PaymentFailed`] and moves nothing.
pub fn collect(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let spender = env.current_contract_address();
    match token::TokenClient::new(env, token).try_transfer_from(&spender, from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::PaymentFailed),
    }
}
