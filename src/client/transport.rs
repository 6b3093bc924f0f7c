//! Store transport
//!
//! The [`Transport`] seam carries encoded envelopes to a store and brings
//! back the raw response body. [`HttpTransport`] is the blocking HTTP
//! implementation with basic authentication.

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;

use crate::config::Config;
use crate::error::{Result, WitsmlError};

use super::soap::{self, StoreOperation};

/// Carries one SOAP round trip
pub trait Transport: Send {
    /// Post `envelope` for `operation`, returning the response envelope
    fn call(&self, operation: StoreOperation, envelope: &str) -> Result<String>;
}

/// Certificate verification mode of an [`HttpTransport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TlsVerification {
    Enabled,
    Disabled,
}

/// Blocking HTTP transport with basic authentication
pub struct HttpTransport {
    url: String,
    username: String,
    password: String,
    http: HttpClient,
}

impl HttpTransport {
    /// Create a transport for a store endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not http(s) or the HTTP client cannot
    /// be built.
    pub fn new(
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        config: &Config,
        tls: TlsVerification,
    ) -> Result<Self> {
        let url = url.into();

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(WitsmlError::Config(format!(
                "URL must start with http:// or https://, got: {}",
                url
            )));
        }

        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(tls == TlsVerification::Disabled)
            .build()?;

        Ok(Self {
            url,
            username: username.into(),
            password: password.into(),
            http,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn call(&self, operation: StoreOperation, envelope: &str) -> Result<String> {
        let response = self
            .http
            .post(&self.url)
            .basic_auth(&self.username, Some(&self.password))
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", operation.soap_action())
            .body(envelope.to_string())
            .send()
            .map_err(classify_send_error)?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            // Stores report SOAP faults with a 500 status
            return match soap::decode_response(&body) {
                Err(fault @ WitsmlError::SoapFault { .. }) => Err(fault),
                _ => Err(WitsmlError::HttpStatus {
                    status: status.as_u16(),
                }),
            };
        }

        Ok(body)
    }
}

/// Certificate-verification wording from rustls and native TLS stacks
const CERTIFICATE_FAILURES: &[&str] = &[
    "invalid peer certificate",
    "unknownissuer",
    "notvalidforname",
    "certificate verify failed",
    "self signed certificate",
    "self-signed certificate",
    "certificate has expired",
];

/// Separate certificate failures from other send errors
///
/// reqwest exposes no TLS predicate, so the source chain is inspected. The
/// top-level message is skipped since it carries the request URL.
fn classify_send_error(err: reqwest::Error) -> WitsmlError {
    if err.is_connect() && is_certificate_failure(err.source()) {
        return WitsmlError::Tls(err.to_string());
    }
    WitsmlError::Http(err)
}

fn is_certificate_failure(source: Option<&(dyn StdError + 'static)>) -> bool {
    let mut current = source;
    while let Some(e) = current {
        let message = e.to_string().to_lowercase();
        if CERTIFICATE_FAILURES.iter().any(|m| message.contains(m)) {
            return true;
        }
        current = e.source();
    }
    false
}
