//! Cadence - Membership Ledger (Soroban)
//! Recurring-payment memberships: merchants publish plans, subscribers pay
//! per billing cycle, and anyone may trigger a renewal once it is due.

#![no_std]
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

mod errors;
mod events;
mod ledger;
mod payment;
mod plans;

pub use errors::{Error, ErrorKind};

/// Immutable billing template. All payments under it go to `merchant`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MembershipPlan {
    pub id: u32,
    pub token: Address,
    pub amount: i128,
    /// Seconds between billing cycles.
    pub frequency: u64,
    pub merchant: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Membership {
    pub plan_id: u32,
    pub subscriber: Address,
    /// Earliest ledger timestamp at which the next payment may be taken.
    pub next_due_date: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    PlanCount,
    Plan(u32),
    Membership(Address, u32),
}

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200;

#[contract]
pub struct MembershipLedgerContract;

#[contractimpl]
impl MembershipLedgerContract {
    /// Publish a new plan with `merchant` as its payee. Returns the plan id,
    /// allocated sequentially from 0.
    pub fn create_membership_plan(
        env: Env,
        merchant: Address,
        token: Address,
        amount: i128,
        frequency: u64,
    ) -> Result<u32, Error> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        merchant.require_auth();

        let plan = plans::create(&env, merchant, token, amount, frequency)?;

        events::publish_plan_created(
            &env,
            plan.id,
            &plan.merchant,
            &plan.token,
            plan.amount,
            plan.frequency,
        );
        Ok(plan.id)
    }

    /// Join `plan_id` by paying the first installment.
    ///
    /// The subscriber must have approved this contract on the plan's token
    /// for at least `plan.amount`. A subscriber already holding the
    /// membership has to cancel before subscribing again.
    pub fn subscribe(env: Env, subscriber: Address, plan_id: u32) -> Result<(), Error> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        subscriber.require_auth();

        let plan = plans::get(&env, plan_id)?;
        if ledger::exists(&env, &subscriber, plan_id) {
            return Err(Error::AlreadySubscribed);
        }

        let next_due_date = env
            .ledger()
            .timestamp()
            .checked_add(plan.frequency)
            .ok_or(Error::Overflow)?;

        payment::collect(&env, &plan.token, &subscriber, &plan.merchant, plan.amount)?;

        let membership = Membership {
            plan_id,
            subscriber: subscriber.clone(),
            next_due_date,
        };
        ledger::store(&env, &membership);

        events::publish_subscribed(&env, &subscriber, plan_id, plan.amount, next_due_date);
        Ok(())
    }

    /// Take the next installment. Open to any caller so renewals can be
    /// driven by a keeper; the subscriber's allowance is what authorizes
    /// the payment.
    ///
    /// The due date moves forward by exactly one `frequency` from its
    /// previous value, so a late renewal does not shift the schedule.
    pub fn renew(env: Env, subscriber: Address, plan_id: u32) -> Result<(), Error> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let mut membership =
            ledger::load(&env, &subscriber, plan_id).ok_or(Error::MembershipNotFound)?;
        let plan = plans::get(&env, plan_id)?;

        if env.ledger().timestamp() < membership.next_due_date {
            return Err(Error::RenewalNotDue);
        }
        let next_due_date = membership
            .next_due_date
            .checked_add(plan.frequency)
            .ok_or(Error::Overflow)?;

        payment::collect(&env, &plan.token, &subscriber, &plan.merchant, plan.amount)?;

        membership.next_due_date = next_due_date;
        ledger::store(&env, &membership);

        events::publish_renewed(&env, &subscriber, plan_id, plan.amount, next_due_date);
        Ok(())
    }

    /// End a membership without refund. Only the subscriber may cancel.
    pub fn cancel(
        env: Env,
        caller: Address,
        subscriber: Address,
        plan_id: u32,
    ) -> Result<(), Error> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        caller.require_auth();

        let membership =
            ledger::load(&env, &subscriber, plan_id).ok_or(Error::MembershipNotFound)?;
        if caller != membership.subscriber {
            return Err(Error::Unauthorized);
        }

        ledger::remove(&env, &subscriber, plan_id);

        events::publish_cancelled(&env, &subscriber, plan_id);
        Ok(())
    }

    /// Pay `amount` back from the merchant to the subscriber and end the
    /// membership. Only the plan's merchant may refund, and the merchant
    /// must have approved this contract for `amount`.
    ///
    /// `amount` is free: partial and full refunds both terminate.
    pub fn refund(
        env: Env,
        caller: Address,
        subscriber: Address,
        plan_id: u32,
        amount: i128,
    ) -> Result<(), Error> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        caller.require_auth();

        let plan = plans::get(&env, plan_id)?;
        if caller != plan.merchant {
            return Err(Error::Unauthorized);
        }
        if !ledger::exists(&env, &subscriber, plan_id) {
            return Err(Error::MembershipNotFound);
        }

        payment::collect(&env, &plan.token, &plan.merchant, &subscriber, amount)?;

        ledger::remove(&env, &subscriber, plan_id);

        events::publish_refunded(&env, &subscriber, plan_id, amount);
        Ok(())
    }

    /// Plan by id, failing with `PlanNotFound` when it does not exist.
    pub fn get_plan(env: Env, plan_id: u32) -> Result<MembershipPlan, Error> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        plans::get(&env, plan_id)
    }

    /// Plan by id, or `None` when it does not exist.
    pub fn membership_plans(env: Env, plan_id: u32) -> Option<MembershipPlan> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        plans::find(&env, plan_id)
    }

    /// Number of plans created so far; also the id the next plan gets.
    pub fn plan_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        plans::count(&env)
    }

    /// Active membership of `subscriber` in `plan_id`, or `None`.
    pub fn memberships(env: Env, subscriber: Address, plan_id: u32) -> Option<Membership> {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ledger::load(&env, &subscriber, plan_id)
    }

    /// Whether `renew` would pass its timing check right now.
    pub fn is_renewal_due(env: Env, subscriber: Address, plan_id: u32) -> bool {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        match ledger::load(&env, &subscriber, plan_id) {
            Some(membership) => env.ledger().timestamp() >= membership.next_due_date,
            None => false,
        }
    }
}
