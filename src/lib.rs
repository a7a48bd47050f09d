mod codec;
mod error;
mod event;

pub use crate::codec::{decode, encode, EVENT_TYPES};
pub use crate::error::CodecError;
pub use crate::event::{
    AccountEvent, BankAccountCreated, BankAccountDeposited, BankAccountEvent, BankAccountWithdrawn,
};
