use super::error::{DecodeError, GatewayError};

/// Final HTTP status code and complete body of one gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawResponse<'a> {
    status: u16,
    body: &'a [u8],
}

impl<'a> RawResponse<'a> {
    pub fn new(status: u16, body: &'a [u8]) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Reject non-2xx statuses, then borrow the body as UTF-8 text.
    ///
    /// The status check runs before the body is looked at.
    pub(crate) fn success_body(&self) -> Result<&'a str, GatewayError> {
        if !self.is_success() {
            let status_text = reason_phrase(self.status);
            log::warn!(
                "gateway answered with HTTP {} ({status_text})",
                self.status
            );
            return Err(GatewayError::HttpStatus {
                status: self.status,
                status_text,
            });
        }

        let body = std::str::from_utf8(self.body).map_err(DecodeError::from)?;
        Ok(body)
    }
}

/// Canonical reason phrase for a status code, empty when the code has none.
fn reason_phrase(status: u16) -> String {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or_default()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_returns_text_for_2xx() {
        let response = RawResponse::new(200, br#"["msgid","1"]"#);
        assert!(response.is_success());
        assert_eq!(response.success_body().unwrap(), r#"["msgid","1"]"#);

        let response = RawResponse::new(299, b"");
        assert_eq!(response.success_body().unwrap(), "");
    }

    #[test]
    fn success_body_maps_non_2xx_with_reason_phrase() {
        let response = RawResponse::new(401, br#"["error","44"]"#);
        match response.success_body().unwrap_err() {
            GatewayError::HttpStatus {
                status,
                status_text,
            } => {
                assert_eq!(status, 401);
                assert_eq!(status_text, "Unauthorized");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let response = RawResponse::new(199, b"");
        assert!(matches!(
            response.success_body(),
            Err(GatewayError::HttpStatus { status: 199, .. })
        ));
    }

    #[test]
    fn success_body_uses_empty_reason_for_unregistered_codes() {
        let response = RawResponse::new(599, b"oops");
        match response.success_body().unwrap_err() {
            GatewayError::HttpStatus { status_text, .. } => assert_eq!(status_text, ""),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn success_body_rejects_invalid_utf8() {
        let response = RawResponse::new(200, &[0xff, 0xfe]);
        assert!(matches!(
            response.success_body(),
            Err(GatewayError::Decode(DecodeError::Utf8(_)))
        ));
    }
}
