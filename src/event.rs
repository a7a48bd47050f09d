use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Capability shared by every event of the bank account family: each fact can
/// report the account it belongs to, so generic dispatch code can extract the
/// routing key without knowing the concrete variant.
pub trait AccountEvent {
    /// The identifier of the aggregate instance this event belongs to.
    fn account_number(&self) -> Uuid;
}

/// The fact that a bank account was opened.
///
/// A passive record: every field is caller-assigned and nothing is validated
/// here. Negative balances and empty strings are accepted; guarding against
/// them is the job of the command handler that decides to emit the fact.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountCreated {
    pub account_number: Uuid,
    pub account_owner: String,
    pub security_code: String,
    pub balance: f64,
}

/// The fact that funds were deposited into an account.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountDeposited {
    pub account_number: Uuid,
    pub amount: f64,
}

/// The fact that funds were withdrawn from an account.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankAccountWithdrawn {
    pub account_number: Uuid,
    pub amount: f64,
}

impl AccountEvent for BankAccountCreated {
    fn account_number(&self) -> Uuid {
        self.account_number
    }
}

impl AccountEvent for BankAccountDeposited {
    fn account_number(&self) -> Uuid {
        self.account_number
    }
}

impl AccountEvent for BankAccountWithdrawn {
    fn account_number(&self) -> Uuid {
        self.account_number
    }
}

/// The bank account event family as a tagged union. On the wire every variant
/// carries its discriminator under the `type` key alongside its fields, and
/// the same discriminator doubles as the case selector when decoding.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum BankAccountEvent {
    #[serde(rename = "BankAccountCreated")]
    Created(BankAccountCreated),
    #[serde(rename = "BankAccountDeposited")]
    Deposited(BankAccountDeposited),
    #[serde(rename = "BankAccountWithdrawn")]
    Withdrawn(BankAccountWithdrawn),
}

impl BankAccountEvent {
    /// The discriminator emitted for this variant, independent of field values.
    pub const fn event_type(&self) -> &'static str {
        match self {
            BankAccountEvent::Created(_) => "BankAccountCreated",
            BankAccountEvent::Deposited(_) => "BankAccountDeposited",
            BankAccountEvent::Withdrawn(_) => "BankAccountWithdrawn",
        }
    }
}

impl AccountEvent for BankAccountEvent {
    fn account_number(&self) -> Uuid {
        match self {
            BankAccountEvent::Created(event) => event.account_number,
            BankAccountEvent::Deposited(event) => event.account_number,
            BankAccountEvent::Withdrawn(event) => event.account_number,
        }
    }
}

impl From<BankAccountCreated> for BankAccountEvent {
    fn from(event: BankAccountCreated) -> Self {
        BankAccountEvent::Created(event)
    }
}

impl From<BankAccountDeposited> for BankAccountEvent {
    fn from(event: BankAccountDeposited) -> Self {
        BankAccountEvent::Deposited(event)
    }
}

impl From<BankAccountWithdrawn> for BankAccountEvent {
    fn from(event: BankAccountWithdrawn) -> Self {
        BankAccountEvent::Withdrawn(event)
    }
}
