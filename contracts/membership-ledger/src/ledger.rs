//! Membership records, keyed by (subscriber, plan id).
//!
//! A record exists exactly while the membership is active; terminating a
//! membership removes the entry instead of flagging it.

use crate::{DataKey, Membership, PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD};
use soroban_sdk::{Address, Env};

fn key(subscriber: &Address, plan_id: u32) -> DataKey {
    DataKey::Membership(subscriber.clone(), plan_id)
}

pub fn load(env: &Env, subscriber: &Address, plan_id: u32) -> Option<Membership> {
    let _ttl_key = key(subscriber, plan_id);
    let membership: Option<Membership> = env.storage().persistent().get(&_ttl_key);
    if membership.is_some() {
        env.storage().persistent().extend_ttl(
            &_ttl_key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }
    membership
}

pub fn exists(env: &Env, subscriber: &Address, plan_id: u32) -> bool {
    env.storage().persistent().has(&key(subscriber, plan_id))
}

pub fn store(env: &Env, membership: &Membership) {
    let _ttl_key = key(&membership.subscriber, membership.plan_id);
    env.storage().persistent().set(&_ttl_key, membership);
    env.storage().persistent().extend_ttl(
        &_ttl_key,
        PERSISTENT_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
    );
}

pub fn remove(env: &Env, subscriber: &Address, plan_id: u32) {
    env.storage().persistent().remove(&key(subscriber, plan_id));
}
