use super::error::DecodeError;

/// Key and value of a `["key","value"]` SMS gateway response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsListPair {
    pub key: String,
    pub value: String,
}

impl SmsListPair {
    /// Parse the value as a base-10 `i64`. An empty value is an error.
    pub fn parse_int(&self) -> Result<i64, DecodeError> {
        if self.value.is_empty() {
            return Err(DecodeError::EmptyValue {
                key: self.key.clone(),
            });
        }
        self.parse_non_empty()
    }

    /// Parse the value as a base-10 `i64`, calling `fallback` only when the value is empty.
    pub fn parse_int_or_else<F>(&self, fallback: F) -> Result<i64, DecodeError>
    where
        F: FnOnce() -> i64,
    {
        if self.value.is_empty() {
            return Ok(fallback());
        }
        self.parse_non_empty()
    }

    fn parse_non_empty(&self) -> Result<i64, DecodeError> {
        self.value
            .parse::<i64>()
            .map_err(|source| DecodeError::InvalidInteger {
                key: self.key.clone(),
                value: self.value.clone(),
                source,
            })
    }
}

/// Decode a bracketed two-element list such as `["msgid","31885463"]`.
///
/// The body is trimmed, one leading `[` and one trailing `]` are stripped, the rest is
/// split on `,` and enclosing `"` are removed from each token. The first token must equal
/// `expected_key` exactly.
pub fn decode_sms_list(body: &str, expected_key: &str) -> Result<SmsListPair, DecodeError> {
    let trimmed = body.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| malformed(trimmed))?;

    let tokens = inner.split(',').map(list_token).collect::<Vec<_>>();

    let [key, value] = tokens.as_slice() else {
        return Err(malformed(trimmed));
    };

    if *key != expected_key {
        return Err(DecodeError::UnexpectedKey {
            expected: expected_key.to_owned(),
            actual: (*key).to_owned(),
        });
    }

    Ok(SmsListPair {
        key: (*key).to_owned(),
        value: (*value).to_owned(),
    })
}

/// First token of a bracketed list body, normalized the way [`decode_sms_list`] does it.
///
/// Returns `None` when the body is not wrapped in `[`/`]`.
pub fn sms_list_key(body: &str) -> Option<&str> {
    let inner = body.trim().strip_prefix('[')?.strip_suffix(']')?;
    inner.split(',').next().map(list_token)
}

fn list_token(token: &str) -> &str {
    token.trim().trim_matches('"')
}

fn malformed(body: &str) -> DecodeError {
    DecodeError::MalformedList {
        body: body.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_quoted_pair() {
        let pair = decode_sms_list(r#"["msgid","31885463"]"#, "msgid").unwrap();
        assert_eq!(pair.key, "msgid");
        assert_eq!(pair.value, "31885463");
        assert_eq!(pair.parse_int().unwrap(), 31885463);
    }

    #[test]
    fn tolerates_surrounding_whitespace_and_unquoted_tokens() {
        let pair = decode_sms_list("  [status, 2]\r\n", "status").unwrap();
        assert_eq!(pair.value, "2");
        assert_eq!(pair.parse_int().unwrap(), 2);

        let pair = decode_sms_list(r#"["error","-5"]"#, "error").unwrap();
        assert_eq!(pair.parse_int().unwrap(), -5);
    }

    #[test]
    fn rejects_unexpected_key_regardless_of_value() {
        for body in [
            r#"["status","2"]"#,
            r#"["status",""]"#,
            r#"["Msgid","1"]"#,
            r#"["error","44"]"#,
        ] {
            match decode_sms_list(body, "msgid").unwrap_err() {
                DecodeError::UnexpectedKey { expected, actual } => {
                    assert_eq!(expected, "msgid");
                    assert_ne!(actual, "msgid");
                }
                other => panic!("unexpected error for {body}: {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_wrong_element_count_or_missing_brackets() {
        for body in [
            r#"["msgid"]"#,
            r#"["msgid","1","2"]"#,
            r#""msgid","1""#,
            r#"["msgid","1""#,
            "",
        ] {
            assert!(
                matches!(
                    decode_sms_list(body, "msgid"),
                    Err(DecodeError::MalformedList { .. })
                ),
                "body: {body}"
            );
        }
    }

    #[test]
    fn list_key_uses_the_same_token_rules() {
        assert_eq!(sms_list_key(r#"["error","44"]"#), Some("error"));
        assert_eq!(sms_list_key(" [error, 44]\n"), Some("error"));
        assert_eq!(
            sms_list_key(r#"["balance":"1","credit":"2","currency":"EUR"]"#),
            Some(r#"balance":"1"#)
        );
        assert_eq!(sms_list_key(r#"{"balance":1}"#), None);
        assert_eq!(sms_list_key(r#""error","44""#), None);
    }

    #[test]
    fn empty_value_uses_fallback_only_when_supplied() {
        let pair = decode_sms_list(r#"["status",""]"#, "status").unwrap();
        assert_eq!(pair.value, "");
        assert_eq!(pair.parse_int_or_else(|| 0).unwrap(), 0);
        assert!(matches!(
            pair.parse_int(),
            Err(DecodeError::EmptyValue { .. })
        ));
    }

    #[test]
    fn fallback_is_not_invoked_for_present_value() {
        let pair = decode_sms_list(r#"["status","6"]"#, "status").unwrap();
        let value = pair
            .parse_int_or_else(|| panic!("fallback must not run"))
            .unwrap();
        assert_eq!(value, 6);
    }

    #[test]
    fn non_numeric_value_is_a_decode_failure() {
        let pair = decode_sms_list(r#"["msgid","abc"]"#, "msgid").unwrap();
        match pair.parse_int().unwrap_err() {
            DecodeError::InvalidInteger { key, value, .. } => {
                assert_eq!(key, "msgid");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(pair.parse_int_or_else(|| 0).is_err());
    }
}
