//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod status;
mod validation;
mod value;

pub use request::{
    SmsMessage, ViberButton, ViberMessage, ViberMessageType, ViberPlusSmsMessage,
    ViberSourceType,
};
pub use response::{Balance, ViberError, ViberMessageReceipt, ViberPlusSmsMessageReceipt};
pub use status::{SmsErrorCode, SmsMessageStatus, ViberMessageStatus, ViberSmsMessageStatus};
pub use validation::ValidationError;
pub use value::{
    ApiKey, Login, MessageText, Password, PhoneNumber, RawPhoneNumber, SenderId, SmsMessageId,
    ViberMessageId,
};
