use serde_json::Value;

use crate::error::CodecError;
use crate::event::BankAccountEvent;

/// The closed set of discriminators this codec recognizes. External dispatch
/// or registry code can use it to reject foreign payloads up front.
pub const EVENT_TYPES: &[&str] = &[
    "BankAccountCreated",
    "BankAccountDeposited",
    "BankAccountWithdrawn",
];

/// Encodes an event as JSON text, tagged with its discriminator under the
/// `type` key alongside the variant's fields.
pub fn encode(event: &BankAccountEvent) -> Result<String, CodecError> {
    Ok(serde_json::to_string(event)?)
}

/// Decodes a tagged JSON payload back into an event.
///
/// The tag is validated before any field is read: a payload with a missing or
/// unrecognized `type` fails with the dedicated variant rather than a generic
/// parse error.
pub fn decode(payload: &str) -> Result<BankAccountEvent, CodecError> {
    let value: Value = serde_json::from_str(payload)?;
    let tag: &str = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(CodecError::MissingEventType)?;

    if !EVENT_TYPES.contains(&tag) {
        return Err(CodecError::UnknownEventType(tag.to_owned()));
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::EVENT_TYPES;
    use crate::event::{
        BankAccountCreated, BankAccountDeposited, BankAccountEvent, BankAccountWithdrawn,
    };

    #[test]
    fn every_variant_discriminator_is_registered() {
        let account_number: Uuid = Uuid::new_v4();

        let events: Vec<BankAccountEvent> = vec![
            BankAccountCreated {
                account_number,
                account_owner: "owner".to_string(),
                security_code: "code".to_string(),
                balance: 0.0,
            }
            .into(),
            BankAccountDeposited {
                account_number,
                amount: 1.0,
            }
            .into(),
            BankAccountWithdrawn {
                account_number,
                amount: 1.0,
            }
            .into(),
        ];

        assert_eq!(events.len(), EVENT_TYPES.len());
        for event in events {
            assert!(EVENT_TYPES.contains(&event.event_type()));
        }
    }
}
