use serde::{Deserialize, Serialize};

use super::error::{DecodeError, GatewayError};
use super::response::RawResponse;
use crate::domain::{
    SmsMessageId, ViberError, ViberMessage, ViberMessageId, ViberMessageReceipt,
    ViberMessageStatus, ViberPlusSmsMessage, ViberPlusSmsMessageReceipt, ViberSmsMessageStatus,
};

/// Field names that together identify a Viber error object.
const ERROR_SIGNATURE: [&str; 4] = ["name", "message", "code", "status"];

#[derive(Debug, Serialize)]
struct ViberMessageJsonRequest<'a> {
    source_addr: &'a str,
    destination_addr: &'a str,
    message_type: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    button_caption: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    button_action: Option<&'a str>,
    source_type: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    callback_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    validity_period: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text_sms: Option<&'a str>,
}

impl<'a> ViberMessageJsonRequest<'a> {
    fn from_message(message: &'a ViberMessage) -> Self {
        let button = message.button();
        Self {
            source_addr: message.sender().as_str(),
            destination_addr: message.receiver().raw(),
            message_type: message.message_type().code(),
            text: message.text().map(|text| text.as_str()),
            image: message.image_url().map(|url| url.as_str()),
            button_caption: button.map(|button| button.caption.as_str()),
            button_action: button.map(|button| button.action.as_str()),
            source_type: message.source_type().code(),
            callback_url: message.callback_url().map(|url| url.as_str()),
            validity_period: message.validity_period().map(|period| period.as_secs()),
            text_sms: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct MessageIdJsonRequest {
    message_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct ViberErrorJsonResponse {
    name: String,
    message: String,
    code: i64,
    status: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct SendJsonResponse {
    #[serde(default)]
    message_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
struct StatusJsonResponse {
    message_id: i64,
    status: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct PlusSmsStatusJsonResponse {
    message_id: i64,
    status: i64,
    #[serde(default)]
    sms_message_id: Option<i64>,
    #[serde(default)]
    sms_message_status: Option<i64>,
}

pub fn encode_viber_message_json(message: &ViberMessage) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&ViberMessageJsonRequest::from_message(message))
}

pub fn encode_viber_plus_sms_message_json(
    message: &ViberPlusSmsMessage,
) -> Result<Vec<u8>, serde_json::Error> {
    let mut request = ViberMessageJsonRequest::from_message(message.viber());
    request.text_sms = Some(message.sms_text().as_str());
    serde_json::to_vec(&request)
}

pub fn encode_viber_status_json(message_id: ViberMessageId) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&MessageIdJsonRequest {
        message_id: message_id.value(),
    })
}

/// Apply HTTP status precedence, then decide whether a 2xx body is a Viber error object.
///
/// The body counts as an error when all of `name`, `message`, `code` and `status` occur
/// in it as raw substrings. Key positions are not checked, so a success body that carries
/// all four words anywhere (for example inside a string value) is classified as an error.
pub fn classify_viber_response<'a>(response: &RawResponse<'a>) -> Result<&'a str, GatewayError> {
    let body = response.success_body()?;
    if !ERROR_SIGNATURE.iter().all(|field| body.contains(*field)) {
        return Ok(body);
    }

    let parsed: ViberErrorJsonResponse = serde_json::from_str(body).map_err(DecodeError::from)?;
    log::debug!(
        "Viber gateway reported error {:?} (code {}, status {})",
        parsed.name,
        parsed.code,
        parsed.status
    );
    Err(GatewayError::Viber(ViberError {
        name: parsed.name,
        message: parsed.message,
        code: parsed.code,
        status: parsed.status,
    }))
}

pub fn decode_viber_send_response(
    response: &RawResponse<'_>,
) -> Result<ViberMessageId, GatewayError> {
    let body = classify_viber_response(response)?;
    let parsed: SendJsonResponse = serde_json::from_str(body).map_err(DecodeError::from)?;
    let id = parsed
        .message_id
        .ok_or(DecodeError::MissingProperty(ViberMessageId::FIELD))?;
    Ok(ViberMessageId::new(id))
}

pub fn decode_viber_status_response(
    response: &RawResponse<'_>,
) -> Result<ViberMessageReceipt, GatewayError> {
    let body = classify_viber_response(response)?;
    let parsed: StatusJsonResponse = serde_json::from_str(body).map_err(DecodeError::from)?;
    Ok(ViberMessageReceipt {
        message_id: ViberMessageId::new(parsed.message_id),
        status: ViberMessageStatus::from_code(parsed.status),
    })
}

pub fn decode_viber_plus_sms_status_response(
    response: &RawResponse<'_>,
) -> Result<ViberPlusSmsMessageReceipt, GatewayError> {
    let body = classify_viber_response(response)?;
    let parsed: PlusSmsStatusJsonResponse =
        serde_json::from_str(body).map_err(DecodeError::from)?;
    Ok(ViberPlusSmsMessageReceipt {
        message_id: ViberMessageId::new(parsed.message_id),
        status: ViberMessageStatus::from_code(parsed.status),
        sms_message_id: parsed.sms_message_id.map(SmsMessageId::new),
        sms_message_status: parsed
            .sms_message_status
            .map(ViberSmsMessageStatus::from_code),
    })
}
