use soroban_sdk::contracterror;

/// Failure codes returned by every fallible entry point. See
/// [`Error::kind`] for the category and [`Error::reason`] for the message.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    TokenAddressNull = 1,
    AmountIsZero = 2,
    FrequencyIsZero = 3,
    PlanNotFound = 4,
    MembershipNotFound = 5,
    AlreadySubscribed = 6,
    RenewalNotDue = 7,
    Unauthorized = 8,
    PaymentFailed = 9,
    Overflow = 10,
}

/// Coarse classification of [`Error`], telling the caller what to fix
/// before retrying.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Bad plan parameters.
    Validation,
    /// Unknown plan or membership.
    NotFound,
    /// The subscriber already holds this membership.
    Conflict,
    /// Renewal attempted before the due date.
    NotDue,
    /// Wrong caller for the role the operation requires.
    Unauthorized,
    /// The token rejected the transfer (balance or allowance).
    PaymentFailed,
}

impl Error {
    pub const fn kind(self) -> ErrorKind {
        match self {
            Error::TokenAddressNull
            | Error::AmountIsZero
            | Error::FrequencyIsZero
            | Error::Overflow => ErrorKind::Validation,
            Error::PlanNotFound | Error::MembershipNotFound => ErrorKind::NotFound,
            Error::AlreadySubscribed => ErrorKind::Conflict,
            Error::RenewalNotDue => ErrorKind::NotDue,
            Error::Unauthorized => ErrorKind::Unauthorized,
            Error::PaymentFailed => ErrorKind::PaymentFailed,
        }
    }

    /// Stable, human-readable reason. Off-chain callers may match on it.
    pub const fn reason(self) -> &'static str {
        match self {
            Error::TokenAddressNull => "token address null",
            Error::AmountIsZero => "membership amount is 0",
            Error::FrequencyIsZero => "membership frequency is 0",
            Error::PlanNotFound => "no such membership plan",
            Error::MembershipNotFound => "no such membership",
            Error::AlreadySubscribed => "membership already active",
            Error::RenewalNotDue => "membership renewal not due",
            Error::Unauthorized => "caller not permitted",
            Error::PaymentFailed => "token transfer failed",
            Error::Overflow => "arithmetic overflow",
        }
    }
}
