//! Typed Rust client for the DecisionTelecom SMS and Viber HTTP APIs.
//!
//! The crate has three layers: a domain layer of strong types, a transport layer that
//! classifies and decodes the gateway's response bodies (including its malformed ones),
//! and a small client layer that issues the HTTP requests.
//!
//! ```rust,no_run
//! use decisiontelecom::{MessageText, RawPhoneNumber, SenderId, SmsAuth, SmsClient, SmsMessage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), decisiontelecom::DecisionTelecomError> {
//!     let client = SmsClient::new(SmsAuth::new("login", "password")?);
//!     let message = SmsMessage::new(
//!         RawPhoneNumber::new("380504444444")?,
//!         SenderId::new("Sender")?,
//!         MessageText::new("hello")?,
//!         true,
//!     );
//!     let id = client.send_message(&message).await?;
//!     let status = client.get_message_status(id).await?;
//!     println!("{id}: {status}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod transport;

pub use client::{
    DecisionTelecomError, SmsAuth, SmsClient, SmsClientBuilder, ViberClient, ViberClientBuilder,
    ViberPlusSmsClient,
};
pub use domain::{
    ApiKey, Balance, Login, MessageText, Password, PhoneNumber, RawPhoneNumber, SenderId,
    SmsErrorCode, SmsMessage, SmsMessageId, SmsMessageStatus, ValidationError, ViberButton,
    ViberError, ViberMessage, ViberMessageId, ViberMessageReceipt, ViberMessageStatus,
    ViberMessageType, ViberPlusSmsMessage, ViberPlusSmsMessageReceipt, ViberSmsMessageStatus,
    ViberSourceType,
};
pub use transport::{DecodeError, GatewayError};
