use serde::Deserialize;

use super::balance::repair_balance_json;
use super::error::{DecodeError, GatewayError};
use super::response::RawResponse;
use super::sms_list::{decode_sms_list, sms_list_key};
use crate::domain::{
    Balance, MessageText, RawPhoneNumber, SenderId, SmsErrorCode, SmsMessage, SmsMessageId,
    SmsMessageStatus,
};

const ERROR_KEY: &str = "error";
const STATUS_KEY: &str = "status";

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    balance: f64,
    credit: f64,
    currency: TransportCurrency,
}

/// Digit-only currency codes (`"978"`) come out of the balance repair as numbers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportCurrency {
    String(String),
    Number(serde_json::Number),
}

impl TransportCurrency {
    fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

pub fn encode_sms_send_query(message: &SmsMessage) -> Vec<(String, String)> {
    vec![
        (
            RawPhoneNumber::FIELD.to_owned(),
            message.receiver().raw().to_owned(),
        ),
        (
            SenderId::FIELD.to_owned(),
            message.sender().as_str().to_owned(),
        ),
        (
            MessageText::FIELD.to_owned(),
            message.text().as_str().to_owned(),
        ),
        (
            "dlr".to_owned(),
            if message.delivery() { "1" } else { "0" }.to_owned(),
        ),
    ]
}

pub fn encode_sms_status_query(message_id: SmsMessageId) -> Vec<(String, String)> {
    vec![(
        SmsMessageId::FIELD.to_owned(),
        message_id.value().to_string(),
    )]
}

/// Apply HTTP status precedence, then detect an `["error","<code>"]` body.
///
/// The body is an error when its first list token is `error`, quoted or not, using the
/// same token rules as [`decode_sms_list`]. Returns the body text otherwise.
pub fn classify_sms_response<'a>(response: &RawResponse<'a>) -> Result<&'a str, GatewayError> {
    let body = response.success_body()?;
    if sms_list_key(body) != Some(ERROR_KEY) {
        return Ok(body);
    }

    let code = decode_sms_list(body, ERROR_KEY)?.parse_int()?;
    let code = SmsErrorCode::from_code(code);
    log::debug!("SMS gateway reported error code {}", code.code());
    Err(GatewayError::Sms { code })
}

pub fn decode_sms_send_response(response: &RawResponse<'_>) -> Result<SmsMessageId, GatewayError> {
    let body = classify_sms_response(response)?;
    let id = decode_sms_list(body, SmsMessageId::FIELD)?.parse_int()?;
    Ok(SmsMessageId::new(id))
}

/// Decode a `["status","<code>"]` body. An empty status means [`SmsMessageStatus::Unknown`].
pub fn decode_sms_status_response(
    response: &RawResponse<'_>,
) -> Result<SmsMessageStatus, GatewayError> {
    let body = classify_sms_response(response)?;
    let code = decode_sms_list(body, STATUS_KEY)?
        .parse_int_or_else(|| SmsMessageStatus::Unknown.code())?;
    Ok(SmsMessageStatus::from_code(code))
}

pub fn decode_sms_balance_response(response: &RawResponse<'_>) -> Result<Balance, GatewayError> {
    let body = classify_sms_response(response)?;
    let repaired = repair_balance_json(body);
    let parsed: BalanceJsonResponse =
        serde_json::from_str(&repaired).map_err(DecodeError::from)?;
    Ok(Balance {
        balance: parsed.balance,
        credit: parsed.credit,
        currency: parsed.currency.into_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(body: &str) -> RawResponse<'_> {
        RawResponse::new(200, body.as_bytes())
    }

    #[test]
    fn encode_send_query_params() {
        let message = SmsMessage::new(
            RawPhoneNumber::new("380504444444").unwrap(),
            SenderId::new("380505555555").unwrap(),
            MessageText::new("Test sms").unwrap(),
            true,
        );
        assert_eq!(
            encode_sms_send_query(&message),
            vec![
                ("phone".to_owned(), "380504444444".to_owned()),
                ("sender".to_owned(), "380505555555".to_owned()),
                ("text".to_owned(), "Test sms".to_owned()),
                ("dlr".to_owned(), "1".to_owned()),
            ]
        );

        let message = SmsMessage::new(
            RawPhoneNumber::new("380504444444").unwrap(),
            SenderId::new("Shop").unwrap(),
            MessageText::new("hi").unwrap(),
            false,
        );
        assert!(
            encode_sms_send_query(&message)
                .iter()
                .any(|(k, v)| k == "dlr" && v == "0")
        );
    }

    #[test]
    fn encode_status_query_params() {
        assert_eq!(
            encode_sms_status_query(SmsMessageId::new(5024173481)),
            vec![("msgid".to_owned(), "5024173481".to_owned())]
        );
    }

    #[test]
    fn send_response_yields_message_id() {
        let id = decode_sms_send_response(&ok(r#"["msgid","31885463"]"#)).unwrap();
        assert_eq!(id, SmsMessageId::new(31885463));
    }

    #[test]
    fn send_response_treats_empty_id_as_failure() {
        let err = decode_sms_send_response(&ok(r#"["msgid",""]"#)).unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Decode(DecodeError::EmptyValue { .. })
        ));
    }

    #[test]
    fn send_response_rejects_other_key() {
        let err = decode_sms_send_response(&ok(r#"["status","2"]"#)).unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Decode(DecodeError::UnexpectedKey { .. })
        ));
    }

    #[test]
    fn error_body_is_classified_with_named_code() {
        let err = decode_sms_send_response(&ok(r#"["error","44"]"#)).unwrap_err();
        assert_eq!(err.sms_code(), Some(SmsErrorCode::InvalidLoginOrPassword));

        let err = decode_sms_balance_response(&ok(r#"["error","45"]"#)).unwrap_err();
        assert_eq!(err.sms_code(), Some(SmsErrorCode::UserLocked));
    }

    #[test]
    fn unquoted_error_body_is_classified_like_quoted_one() {
        let err = decode_sms_status_response(&ok("[error,44]")).unwrap_err();
        assert_eq!(err.sms_code(), Some(SmsErrorCode::InvalidLoginOrPassword));

        let err = decode_sms_send_response(&ok(r#" [ "error" , 51 ] "#)).unwrap_err();
        assert_eq!(err.sms_code(), Some(SmsErrorCode::InvalidPhoneNumber));
    }

    #[test]
    fn error_word_outside_the_key_position_is_not_an_error_body() {
        let err = decode_sms_status_response(&ok(r#"["status","error"]"#)).unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Decode(DecodeError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn error_body_with_unknown_code_still_decodes() {
        let err = decode_sms_status_response(&ok(r#"["error","99"]"#)).unwrap_err();
        assert_eq!(err.sms_code(), Some(SmsErrorCode::Unknown(99)));
        assert_eq!(err.to_string(), "SMS gateway error: unknown error code: 99");
    }

    #[test]
    fn error_body_with_bad_code_is_a_decode_error() {
        let err = decode_sms_send_response(&ok(r#"["error","oops"]"#)).unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Decode(DecodeError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn non_2xx_takes_precedence_over_body() {
        for body in [r#"["error","44"]"#, r#"["msgid","1"]"#, "garbage"] {
            let err = decode_sms_send_response(&RawResponse::new(500, body.as_bytes())).unwrap_err();
            match err {
                GatewayError::HttpStatus {
                    status,
                    status_text,
                } => {
                    assert_eq!(status, 500);
                    assert_eq!(status_text, "Internal Server Error");
                }
                other => panic!("unexpected error for {body}: {other:?}"),
            }
        }
    }

    #[test]
    fn status_response_maps_codes_and_empty_fallback() {
        let status = decode_sms_status_response(&ok(r#"["status","2"]"#)).unwrap();
        assert_eq!(status, SmsMessageStatus::Delivered);

        let status = decode_sms_status_response(&ok(r#"["status",""]"#)).unwrap();
        assert_eq!(status, SmsMessageStatus::Unknown);

        let status = decode_sms_status_response(&ok(r#"["status","42"]"#)).unwrap();
        assert_eq!(status, SmsMessageStatus::Invalid(42));
        assert_eq!(status.to_string(), "invalid status");
    }

    #[test]
    fn balance_response_is_repaired_and_decoded() {
        let balance = decode_sms_balance_response(&ok(
            r#"["balance":"-791.8391870","credit":"1000","currency":"EUR"]"#,
        ))
        .unwrap();
        assert_eq!(
            balance,
            Balance {
                balance: -791.8391870,
                credit: 1000.0,
                currency: "EUR".to_owned(),
            }
        );

        let balance = decode_sms_balance_response(&ok(
            r#"["balance":"348.879089","credit":"-5000.509409","currency":""]"#,
        ))
        .unwrap();
        assert_eq!(balance.balance, 348.879089);
        assert_eq!(balance.credit, -5000.509409);
        assert_eq!(balance.currency, "");
    }

    #[test]
    fn balance_response_with_zero_padded_amounts() {
        let balance = decode_sms_balance_response(&ok(
            r#"["balance":"007.50","credit":"0","currency":"EUR"]"#,
        ))
        .unwrap();
        assert_eq!(balance.balance, 7.5);
        assert_eq!(balance.credit, 0.0);
        assert_eq!(balance.currency, "EUR");
    }

    #[test]
    fn balance_response_with_numeric_currency_code() {
        let balance = decode_sms_balance_response(&ok(
            r#"["balance":"10","credit":"0","currency":"978"]"#,
        ))
        .unwrap();
        assert_eq!(balance.balance, 10.0);
        assert_eq!(balance.currency, "978");
    }

    #[test]
    fn balance_response_accepts_already_valid_json() {
        let balance = decode_sms_balance_response(&ok(
            r#"{"balance":12.5,"credit":0,"currency":"UAH"}"#,
        ))
        .unwrap();
        assert_eq!(balance.balance, 12.5);
        assert_eq!(balance.credit, 0.0);
        assert_eq!(balance.currency, "UAH");
    }

    #[test]
    fn malformed_balance_is_a_decode_error() {
        let err = decode_sms_balance_response(&ok(r#"["balance":"abc","credit":"1"]"#)).unwrap_err();
        assert!(matches!(err, GatewayError::Decode(DecodeError::Json(_))));
    }
}
