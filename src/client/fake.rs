use std::sync::{Arc, Mutex};

use url::Url;

use super::{BoxError, BoxFuture, HttpResponse, HttpTransport};

/// One request seen by [`FakeTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Recorded {
    Get {
        url: Url,
    },
    PostJson {
        url: String,
        authorization: String,
        body: serde_json::Value,
    },
}

#[derive(Debug, Clone)]
pub(super) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    last_request: Option<Recorded>,
    response: Result<(u16, Vec<u8>), String>,
}

impl FakeTransport {
    pub(super) fn new(response_status: u16, response_body: impl Into<String>) -> Self {
        Self::with_result(Ok((response_status, response_body.into().into_bytes())))
    }

    /// A transport whose every call fails before any response is received.
    pub(super) fn failing(message: impl Into<String>) -> Self {
        Self::with_result(Err(message.into()))
    }

    fn with_result(response: Result<(u16, Vec<u8>), String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                last_request: None,
                response,
            })),
        }
    }

    pub(super) fn last_request(&self) -> Option<Recorded> {
        self.state.lock().unwrap().last_request.clone()
    }

    fn respond(&self, request: Recorded) -> Result<HttpResponse, BoxError> {
        let mut state = self.state.lock().unwrap();
        state.last_request = Some(request);
        match &state.response {
            Ok((status, body)) => Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            }),
            Err(message) => Err(message.clone().into()),
        }
    }
}

impl HttpTransport for FakeTransport {
    fn get<'a>(&'a self, url: Url) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move { self.respond(Recorded::Get { url }) })
    }

    fn post_json<'a>(
        &'a self,
        url: &'a str,
        authorization: &'a str,
        body: Vec<u8>,
    ) -> BoxFuture<'a, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let body = serde_json::from_slice(&body)?;
            self.respond(Recorded::PostJson {
                url: url.to_owned(),
                authorization: authorization.to_owned(),
                body,
            })
        })
    }
}
