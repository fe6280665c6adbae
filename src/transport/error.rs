use std::num::ParseIntError;

use crate::domain::{SmsErrorCode, ViberError};

/// A response body that did not match the shape expected for its classified branch.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid list response: expected two bracketed elements, got {body:?}")]
    MalformedList { body: String },

    #[error("invalid response: unknown key '{actual}' (expected '{expected}')")]
    UnexpectedKey { expected: String, actual: String },

    #[error("invalid response: empty value for key '{key}'")]
    EmptyValue { key: String },

    #[error("invalid response: value {value:?} for key '{key}' is not an integer")]
    InvalidInteger {
        key: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid response: property '{0}' was not found")]
    MissingProperty(&'static str),
}

/// Outcome of classifying a gateway response that is not a success value.
///
/// Exactly one variant is produced per failed call. Protocol specific fields stay on
/// their own variant; callers branch on the tag.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Non-2xx HTTP status. Takes precedence over any body content.
    #[error("unexpected HTTP status: {status} ({status_text})")]
    HttpStatus { status: u16, status_text: String },

    /// The SMS gateway answered `["error","<code>"]`.
    #[error("SMS gateway error: {code}")]
    Sms { code: SmsErrorCode },

    /// The Viber gateway answered with a `name`/`message`/`code`/`status` object.
    #[error("Viber gateway error: {0}")]
    Viber(ViberError),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),
}

impl GatewayError {
    /// SMS error code, if this is an SMS domain error.
    pub fn sms_code(&self) -> Option<SmsErrorCode> {
        match self {
            Self::Sms { code } => Some(*code),
            _ => None,
        }
    }

    /// Viber error payload, if this is a Viber domain error.
    pub fn viber_error(&self) -> Option<&ViberError> {
        match self {
            Self::Viber(error) => Some(error),
            _ => None,
        }
    }
}
