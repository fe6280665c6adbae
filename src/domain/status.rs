//! Integer code registries returned by the gateway.
//!
//! Every lookup is total: codes outside the documented set are preserved in an
//! `Invalid`/`Unknown` variant rather than rejected. Gap codes that the gateway
//! reserves but never emits have their own variants and render as `invalid status`.

use std::fmt;

const INVALID_STATUS: &str = "invalid status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Delivery status of an SMS message (`state` endpoint).
pub enum SmsMessageStatus {
    /// `0`; also used when the gateway returns an empty status.
    Unknown,
    /// `1`, reserved and never returned.
    Reserved1,
    /// `2`
    Delivered,
    /// `3`
    Expired,
    /// `4`, reserved and never returned.
    Reserved4,
    /// `5`
    Undeliverable,
    /// `6`
    Accepted,
    /// Any code outside `0..=6`, preserved as received.
    Invalid(i64),
}

impl SmsMessageStatus {
    /// Map a raw status code. Never fails.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Reserved1,
            2 => Self::Delivered,
            3 => Self::Expired,
            4 => Self::Reserved4,
            5 => Self::Undeliverable,
            6 => Self::Accepted,
            other => Self::Invalid(other),
        }
    }

    /// Integer code as used on the wire.
    pub fn code(self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::Reserved1 => 1,
            Self::Delivered => 2,
            Self::Expired => 3,
            Self::Reserved4 => 4,
            Self::Undeliverable => 5,
            Self::Accepted => 6,
            Self::Invalid(code) => code,
        }
    }

    /// Human readable status name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Delivered => "Delivered",
            Self::Expired => "Expired",
            Self::Undeliverable => "Undeliverable",
            Self::Accepted => "Accepted",
            Self::Reserved1 | Self::Reserved4 | Self::Invalid(_) => INVALID_STATUS,
        }
    }

    /// Whether this is one of the reserved gap codes.
    pub fn is_reserved(self) -> bool {
        matches!(self, Self::Reserved1 | Self::Reserved4)
    }
}

impl fmt::Display for SmsMessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status of a Viber message (`receive-viber` endpoint).
pub enum ViberMessageStatus {
    Sent,
    Delivered,
    Error,
    Rejected,
    Undelivered,
    Pending,
    /// `20`
    Unknown,
    /// Any code outside `0..=5` and `20`, preserved as received.
    Invalid(i64),
}

impl ViberMessageStatus {
    /// Map a raw status code. Never fails.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Sent,
            1 => Self::Delivered,
            2 => Self::Error,
            3 => Self::Rejected,
            4 => Self::Undelivered,
            5 => Self::Pending,
            20 => Self::Unknown,
            other => Self::Invalid(other),
        }
    }

    /// Integer code as used on the wire.
    pub fn code(self) -> i64 {
        match self {
            Self::Sent => 0,
            Self::Delivered => 1,
            Self::Error => 2,
            Self::Rejected => 3,
            Self::Undelivered => 4,
            Self::Pending => 5,
            Self::Unknown => 20,
            Self::Invalid(code) => code,
        }
    }

    /// Human readable status name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sent => "Sent",
            Self::Delivered => "Delivered",
            Self::Error => "Error",
            Self::Rejected => "Rejected",
            Self::Undelivered => "Undelivered",
            Self::Pending => "Pending",
            Self::Unknown => "Unknown",
            Self::Invalid(_) => INVALID_STATUS,
        }
    }

    /// Whether the gateway will not report any further transition for this message.
    pub fn is_final(self) -> bool {
        matches!(
            self,
            Self::Delivered | Self::Error | Self::Rejected | Self::Undelivered
        )
    }
}

impl fmt::Display for ViberMessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status of the fallback SMS of a Viber plus SMS message (`sms_message_status`).
pub enum ViberSmsMessageStatus {
    /// `2`
    Delivered,
    /// `3`
    Expired,
    /// `4`, reserved and never returned.
    Reserved4,
    /// `5`
    Undeliverable,
    /// Any code outside `2..=5`, preserved as received.
    Invalid(i64),
}

impl ViberSmsMessageStatus {
    /// Map a raw status code. Never fails.
    pub fn from_code(code: i64) -> Self {
        match code {
            2 => Self::Delivered,
            3 => Self::Expired,
            4 => Self::Reserved4,
            5 => Self::Undeliverable,
            other => Self::Invalid(other),
        }
    }

    /// Integer code as used on the wire.
    pub fn code(self) -> i64 {
        match self {
            Self::Delivered => 2,
            Self::Expired => 3,
            Self::Reserved4 => 4,
            Self::Undeliverable => 5,
            Self::Invalid(code) => code,
        }
    }

    /// Human readable status name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Delivered => "Delivered",
            Self::Expired => "Expired",
            Self::Undeliverable => "Undeliverable",
            Self::Reserved4 | Self::Invalid(_) => INVALID_STATUS,
        }
    }

    /// Whether this is the reserved gap code.
    pub fn is_reserved(self) -> bool {
        matches!(self, Self::Reserved4)
    }
}

impl fmt::Display for ViberSmsMessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Error code reported by the SMS gateway in an `["error","<code>"]` body.
///
/// Codes outside `40..=51` are preserved in [`SmsErrorCode::Unknown`].
pub enum SmsErrorCode {
    InvalidNumber,
    IncorrectSender,
    InvalidMessageId,
    IncorrectJson,
    InvalidLoginOrPassword,
    UserLocked,
    EmptyText,
    EmptyLogin,
    EmptyPassword,
    NotEnoughMoney,
    AuthorizationError,
    InvalidPhoneNumber,
    Unknown(i64),
}

impl SmsErrorCode {
    /// Map a raw error code. Never fails.
    pub fn from_code(code: i64) -> Self {
        match code {
            40 => Self::InvalidNumber,
            41 => Self::IncorrectSender,
            42 => Self::InvalidMessageId,
            43 => Self::IncorrectJson,
            44 => Self::InvalidLoginOrPassword,
            45 => Self::UserLocked,
            46 => Self::EmptyText,
            47 => Self::EmptyLogin,
            48 => Self::EmptyPassword,
            49 => Self::NotEnoughMoney,
            50 => Self::AuthorizationError,
            51 => Self::InvalidPhoneNumber,
            other => Self::Unknown(other),
        }
    }

    /// Integer code as used on the wire.
    pub fn code(self) -> i64 {
        match self {
            Self::InvalidNumber => 40,
            Self::IncorrectSender => 41,
            Self::InvalidMessageId => 42,
            Self::IncorrectJson => 43,
            Self::InvalidLoginOrPassword => 44,
            Self::UserLocked => 45,
            Self::EmptyText => 46,
            Self::EmptyLogin => 47,
            Self::EmptyPassword => 48,
            Self::NotEnoughMoney => 49,
            Self::AuthorizationError => 50,
            Self::InvalidPhoneNumber => 51,
            Self::Unknown(code) => code,
        }
    }

    /// Name of a known code, `None` for [`SmsErrorCode::Unknown`].
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::InvalidNumber => "InvalidNumber",
            Self::IncorrectSender => "IncorrectSender",
            Self::InvalidMessageId => "InvalidMessageId",
            Self::IncorrectJson => "IncorrectJson",
            Self::InvalidLoginOrPassword => "InvalidLoginOrPassword",
            Self::UserLocked => "UserLocked",
            Self::EmptyText => "EmptyText",
            Self::EmptyLogin => "EmptyLogin",
            Self::EmptyPassword => "EmptyPassword",
            Self::NotEnoughMoney => "NotEnoughMoney",
            Self::AuthorizationError => "AuthorizationError",
            Self::InvalidPhoneNumber => "InvalidPhoneNumber",
            Self::Unknown(_) => return None,
        })
    }

    /// Whether this code indicates invalid, missing, or locked credentials.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::InvalidLoginOrPassword
                | Self::UserLocked
                | Self::EmptyLogin
                | Self::EmptyPassword
                | Self::AuthorizationError
        )
    }
}

impl fmt::Display for SmsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown error code: {}", self.code()),
        }
    }
}
