use soroban_sdk::{symbol_short, Address, Env, Symbol};

const TOPIC: Symbol = symbol_short!("member");

pub fn publish_plan_created(
    env: &Env,
    plan_id: u32,
    merchant: &Address,
    token: &Address,
    amount: i128,
    frequency: u64,
) {
    env.events().publish(
        (TOPIC, symbol_short!("plan")),
        (plan_id, merchant.clone(), token.clone(), amount, frequency),
    );
}

pub fn publish_subscribed(
    env: &Env,
    subscriber: &Address,
    plan_id: u32,
    amount: i128,
    next_due_date: u64,
) {
    env.events().publish(
        (TOPIC, symbol_short!("subbed")),
        (subscriber.clone(), plan_id, amount, next_due_date),
    );
}

pub fn publish_renewed(
    env: &Env,
    subscriber: &Address,
    plan_id: u32,
    amount: i128,
    next_due_date: u64,
) {
    env.events().publish(
        (TOPIC, symbol_short!("renewed")),
        (subscriber.clone(), plan_id, amount, next_due_date),
    );
}

pub fn publish_cancelled(env: &Env, subscriber: &Address, plan_id: u32) {
    env.events().publish(
        (TOPIC, symbol_short!("cancel")),
        (subscriber.clone(), plan_id),
    );
}

pub fn publish_refunded(env: &Env, subscriber: &Address, plan_id: u32, amount: i128) {
    env.events().publish(
        (TOPIC, symbol_short!("refund")),
        (subscriber.clone(), plan_id, amount),
    );
}
