use crate::USER_AGENT;
use std::time::Duration;
use thiserror::Error;
use ureq::{Agent, RequestBuilder};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    Get,
    Post,
}

/// A backend-independent description of an HTTP request
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub cookies: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn get(url: &str) -> HttpRequest {
        HttpRequest {
            method: Method::Get,
            url: url.to_owned(),
            headers: Vec::new(),
            cookies: Vec::new(),
            body: None,
        }
    }

    pub fn post(url: &str, body: Vec<u8>) -> HttpRequest {
        HttpRequest {
            method: Method::Post,
            url: url.to_owned(),
            headers: Vec::new(),
            cookies: Vec::new(),
            body: Some(body),
        }
    }

    pub fn header(mut self, name: &str, value: &str) -> HttpRequest {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    pub fn cookie(mut self, name: &str, value: &str) -> HttpRequest {
        self.cookies.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Returns the value of the request's header with the given name
    /// (compared case-insensitively), if any
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the cookies folded into a single `Cookie` header value, or
    /// `None` if there are no cookies
    pub fn cookie_header(&self) -> Option<String> {
        (!self.cookies.is_empty()).then(|| {
            self.cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ")
        })
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The capability to perform an HTTP request.
///
/// Implementations must return responses of any status as `Ok`; only a
/// failure to send the request or to read the response body is an error.
/// Judging the status is left to the caller so that all backends are handled
/// alike.
pub trait Transport {
    fn perform(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn perform(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).perform(request)
    }
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to perform HTTP request")]
    Send(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("failed to read HTTP response")]
    Read(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A [`Transport`] backed by a blocking [`ureq::Agent`]
#[derive(Clone, Debug)]
pub struct UreqTransport {
    inner: Agent,
}

impl UreqTransport {
    /// Create a transport whose requests are each bounded by `timeout`, if
    /// given
    pub fn new(timeout: Option<Duration>) -> UreqTransport {
        let inner = Agent::config_builder()
            .http_status_as_error(false)
            .user_agent(USER_AGENT)
            .timeout_global(timeout)
            .build()
            .into();
        UreqTransport { inner }
    }
}

impl Transport for UreqTransport {
    fn perform(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let cookie = request.cookie_header();
        let r = match request.method {
            Method::Get => {
                set_headers(self.inner.get(&request.url), &request.headers, cookie).call()
            }
            Method::Post => set_headers(self.inner.post(&request.url), &request.headers, cookie)
                .send(request.body.as_deref().unwrap_or_default()),
        };
        let response = r.map_err(|e| TransportError::Send(Box::new(e)))?;
        let status = response.status().as_u16();
        let body = response
            .into_body()
            .read_to_vec()
            .map_err(|e| TransportError::Read(Box::new(e)))?;
        Ok(HttpResponse { status, body })
    }
}

fn set_headers<B>(
    mut req: RequestBuilder<B>,
    headers: &[(String, String)],
    cookie: Option<String>,
) -> RequestBuilder<B> {
    for (name, value) in headers {
        req = req.header(name.as_str(), value.as_str());
    }
    if let Some(cookie) = cookie {
        req = req.header("Cookie", cookie);
    }
    req
}
