use std::fmt;

use crate::domain::status::{ViberMessageStatus, ViberSmsMessageStatus};
use crate::domain::value::{SmsMessageId, ViberMessageId};

#[derive(Debug, Clone, PartialEq)]
/// SMS account balance.
pub struct Balance {
    pub balance: f64,
    pub credit: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViberMessageReceipt {
    pub message_id: ViberMessageId,
    pub status: ViberMessageStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Receipt of a Viber plus SMS message.
///
/// The SMS fields are only reported for transactional messages that fell back to SMS.
pub struct ViberPlusSmsMessageReceipt {
    pub message_id: ViberMessageId,
    pub status: ViberMessageStatus,
    pub sms_message_id: Option<SmsMessageId>,
    pub sms_message_status: Option<ViberSmsMessageStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Error object returned by the Viber gateway in a 2xx body.
pub struct ViberError {
    pub name: String,
    pub message: String,
    pub code: i64,
    pub status: i64,
}

impl fmt::Display for ViberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (code {}, status {})",
            self.name, self.message, self.code, self.status
        )
    }
}

impl std::error::Error for ViberError {}
