//! Transport layer: wire formats and the response decode/classify core.
//!
//! Every `decode_*` function is a pure function from a [`RawResponse`] to either a typed
//! value or a [`GatewayError`]. A non-2xx status always wins over the body.

mod balance;
mod error;
mod response;
mod sms;
mod sms_list;
mod viber;

pub use balance::repair_balance_json;
pub use error::{DecodeError, GatewayError};
pub use response::RawResponse;
pub use sms::{
    classify_sms_response, decode_sms_balance_response, decode_sms_send_response,
    decode_sms_status_response, encode_sms_send_query, encode_sms_status_query,
};
pub use sms_list::{SmsListPair, decode_sms_list, sms_list_key};
pub use viber::{
    classify_viber_response, decode_viber_plus_sms_status_response, decode_viber_send_response,
    decode_viber_status_response, encode_viber_message_json, encode_viber_plus_sms_message_json,
    encode_viber_status_json,
};
