use thiserror::Error;

/// Failures at the encode/decode boundary. Constructing an event never fails;
/// the whole error taxonomy lives here.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("payload has no `type` tag")]
    MissingEventType,

    #[error("unknown event type `{0}`")]
    UnknownEventType(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
