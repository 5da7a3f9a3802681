//! Plan registry: append-only list of immutable billing plans.

use crate::errors::Error;
use crate::{
    DataKey, MembershipPlan, INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD,
    PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD,
};
use soroban_sdk::{Address, Env};

/// All-zero contract and account strkeys; neither can host a token.
const NULL_CONTRACT: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";
const NULL_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn is_null_address(env: &Env, addr: &Address) -> bool {
    *addr == Address::from_str(env, NULL_CONTRACT) || *addr == Address::from_str(env, NULL_ACCOUNT)
}

/// Validate and append a plan. Checks run in field order so the first bad
/// field is the one reported.
pub fn create(
    env: &Env,
    merchant: Address,
    token: Address,
    amount: i128,
    frequency: u64,
) -> Result<MembershipPlan, Error> {
    if is_null_address(env, &token) {
        return Err(Error::TokenAddressNull);
    }
    if amount <= 0 {
        return Err(Error::AmountIsZero);
    }
    if frequency == 0 {
        return Err(Error::FrequencyIsZero);
    }

    let id = count(env);
    let next = id.checked_add(1).ok_or(Error::Overflow)?;

    let plan = MembershipPlan {
        id,
        token,
        amount,
        frequency,
        merchant,
    };

    let _ttl_key = DataKey::Plan(id);
    env.storage().persistent().set(&_ttl_key, &plan);
    env.storage().persistent().extend_ttl(
        &_ttl_key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
    env.storage().instance().set(&DataKey::PlanCount, &next);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

    Ok(plan)
}

pub fn find(env: &Env, plan_id: u32) -> Option<MembershipPlan> {
    let key = DataKey::Plan(plan_id);
    let plan: Option<MembershipPlan> = env.storage().persistent().get(&key);
    if plan.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    plan
}

pub fn get(env: &Env, plan_id: u32) -> Result<MembershipPlan, Error> {
    find(env, plan_id).ok_or(Error::PlanNotFound)
}

/// Number of plans created so far, which is also the next id.
pub fn count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::PlanCount)
        .unwrap_or(0)
}
