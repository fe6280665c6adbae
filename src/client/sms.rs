use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::{
    DecisionTelecomError, HttpOptions, HttpResponse, HttpTransport, ReqwestTransport, endpoint,
    log_target,
};
use crate::domain::{
    Balance, Login, Password, SmsMessage, SmsMessageId, SmsMessageStatus, ValidationError,
};
use crate::transport::{
    decode_sms_balance_response, decode_sms_send_response, decode_sms_status_response,
    encode_sms_send_query, encode_sms_status_query,
};

const DEFAULT_BASE_URL: &str = "https://web.it-decision.com/ru/js";

#[derive(Debug, Clone)]
/// Login and password of an SMS gateway account, sent as query parameters.
pub struct SmsAuth {
    login: Login,
    password: Password,
}

impl SmsAuth {
    /// Create credentials and validate that both parts are non-empty.
    pub fn new(
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            login: Login::new(login)?,
            password: Password::new(password)?,
        })
    }

    fn push_query_params(&self, params: &mut Vec<(String, String)>) {
        params.push((Login::FIELD.to_owned(), self.login.as_str().to_owned()));
        params.push((Password::FIELD.to_owned(), self.password.as_str().to_owned()));
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmsClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct SmsClientBuilder {
    auth: SmsAuth,
    base_url: String,
    http: HttpOptions,
}

impl SmsClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(auth: SmsAuth) -> Self {
        Self {
            auth,
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: HttpOptions::default(),
        }
    }

    /// Override the base URL; `send`, `state` and `balance` are appended to it.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.http.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`SmsClient`].
    pub fn build(self) -> Result<SmsClient, DecisionTelecomError> {
        Url::parse(&self.base_url)?;
        let client = self.http.build_client()?;
        Ok(SmsClient::with_transport(
            self.auth,
            &self.base_url,
            Arc::new(ReqwestTransport { client }),
        ))
    }
}

#[derive(Clone)]
/// Client for the legacy SMS endpoints.
///
/// By default it uses `https://web.it-decision.com/ru/js/{send,state,balance}`. Requests
/// are plain `GET`s with query parameters; responses are bracketed lists such as
/// `["msgid","31885463"]`.
pub struct SmsClient {
    auth: SmsAuth,
    send_endpoint: String,
    status_endpoint: String,
    balance_endpoint: String,
    http: Arc<dyn HttpTransport>,
}

impl SmsClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`SmsClient::builder`].
    pub fn new(auth: SmsAuth) -> Self {
        Self::with_transport(
            auth,
            DEFAULT_BASE_URL,
            Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        )
    }

    /// Start building a client with custom settings.
    pub fn builder(auth: SmsAuth) -> SmsClientBuilder {
        SmsClientBuilder::new(auth)
    }

    fn with_transport(auth: SmsAuth, base_url: &str, http: Arc<dyn HttpTransport>) -> Self {
        Self {
            auth,
            send_endpoint: endpoint(base_url, "send"),
            status_endpoint: endpoint(base_url, "state"),
            balance_endpoint: endpoint(base_url, "balance"),
            http,
        }
    }

    /// Send an SMS message and return its id.
    ///
    /// Errors:
    /// - [`DecisionTelecomError::Transport`] when no response was received,
    /// - [`DecisionTelecomError::Gateway`] for non-2xx statuses, `["error","<code>"]`
    ///   bodies, or bodies that are not `["msgid","<id>"]`.
    pub async fn send_message(
        &self,
        message: &SmsMessage,
    ) -> Result<SmsMessageId, DecisionTelecomError> {
        let response = self
            .get(&self.send_endpoint, encode_sms_send_query(message))
            .await?;
        Ok(decode_sms_send_response(&response.raw())?)
    }

    /// Get the delivery status of a message sent with `delivery = true`.
    ///
    /// An empty status in the response is reported as [`SmsMessageStatus::Unknown`].
    pub async fn get_message_status(
        &self,
        message_id: SmsMessageId,
    ) -> Result<SmsMessageStatus, DecisionTelecomError> {
        let response = self
            .get(&self.status_endpoint, encode_sms_status_query(message_id))
            .await?;
        Ok(decode_sms_status_response(&response.raw())?)
    }

    /// Get the account balance.
    pub async fn get_balance(&self) -> Result<Balance, DecisionTelecomError> {
        let response = self.get(&self.balance_endpoint, Vec::new()).await?;
        Ok(decode_sms_balance_response(&response.raw())?)
    }

    async fn get(
        &self,
        endpoint: &str,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, DecisionTelecomError> {
        let mut params = Vec::<(String, String)>::new();
        self.auth.push_query_params(&mut params);
        params.extend(query);

        let url = Url::parse_with_params(endpoint, &params)?;
        log::debug!("GET {}", log_target(&url));

        self.http
            .get(url)
            .await
            .map_err(DecisionTelecomError::Transport)
    }
}
