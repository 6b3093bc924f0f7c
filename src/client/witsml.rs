//! WITSML store client
//!
//! Session handling and the store operations.

use crate::config::Config;
use crate::error::{Result, WitsmlError};
use crate::xml::XmlNode;

use super::response::{result_text, GetReply, ReturnElements, StoreReply};
use super::soap::{self, StoreOperation};
use super::transport::{HttpTransport, TlsVerification, Transport};

/// Text a healthy store returns for base message 1
pub const BASE_MSG_SUCCESS: &str = "Function completed successfully";

/// Client for a WITSML store
///
/// The session is an explicit `Option`: every store call checks it before
/// dispatch and fails with [`WitsmlError::ClientNotConnected`] when absent.
pub struct WitsmlClient {
    /// Client configuration
    config: Config,

    /// Active session transport, `None` until a successful connect
    session: Option<Box<dyn Transport>>,
}

impl WitsmlClient {
    /// Create a disconnected client with the default config
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a disconnected client
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            session: None,
        }
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Connect to a store endpoint
    ///
    /// Returns whether the base-message probe succeeded. Every failure
    /// (bad credentials, network, TLS, unexpected probe text) is logged and
    /// reported as `false`; use [`try_connect`](Self::try_connect) to see
    /// which one occurred.
    pub fn connect(&mut self, url: &str, username: &str, password: &str) -> bool {
        match self.try_connect(url, username, password) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Connection to {} failed: {}", url, e);
                false
            }
        }
    }

    /// Connect to a store endpoint, reporting why a connection failed
    ///
    /// A TLS verification failure is retried once with certificate
    /// verification disabled when the config allows it. Any previous
    /// session is dropped first.
    pub fn try_connect(&mut self, url: &str, username: &str, password: &str) -> Result<()> {
        let config = self.config.clone();
        self.connect_via(|tls| {
            let transport = HttpTransport::new(url, username, password, &config, tls)?;
            Ok(Box::new(transport) as Box<dyn Transport>)
        })
    }

    /// Connect through transports built by `make`
    ///
    /// `make` is called with [`TlsVerification::Enabled`] first. Only a
    /// [`WitsmlError::Tls`] probe failure leads to a second call, with
    /// [`TlsVerification::Disabled`], and only when
    /// `retry_insecure_on_tls_failure` is set.
    pub fn connect_via<F>(&mut self, make: F) -> Result<()>
    where
        F: Fn(TlsVerification) -> Result<Box<dyn Transport>>,
    {
        self.session = None;

        match self.open_session(make(TlsVerification::Enabled)?) {
            Err(WitsmlError::Tls(reason)) if self.config.retry_insecure_on_tls_failure => {
                tracing::warn!(
                    "TLS verification failed ({}), retrying without certificate verification",
                    reason
                );
                self.open_session(make(TlsVerification::Disabled)?)
            }
            result => result,
        }
    }

    /// Probe and adopt a caller-supplied transport
    pub fn connect_with(&mut self, transport: Box<dyn Transport>) -> bool {
        self.session = None;

        match self.open_session(transport) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Connection probe failed: {}", e);
                false
            }
        }
    }

    /// Probe the store; keep the transport as the session on success
    fn open_session(&mut self, transport: Box<dyn Transport>) -> Result<()> {
        let message = base_msg(transport.as_ref(), 1)?;
        if message.trim() != BASE_MSG_SUCCESS {
            return Err(WitsmlError::ProbeFailed(message));
        }

        tracing::info!("Store session established");
        self.session = Some(transport);
        Ok(())
    }

    /// Drop the current session
    pub fn disconnect(&mut self) {
        if self.session.take().is_some() {
            tracing::debug!("Store session closed");
        }
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_some()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Store Operations
    // =========================================================================

    /// `WMLS_GetFromStore`
    pub fn get_from_store(
        &self,
        object_type: &str,
        query_xml: &str,
        return_elements: ReturnElements,
    ) -> Result<GetReply> {
        let options = format!("returnElements={}", return_elements);
        let response = self.invoke(
            StoreOperation::GetFromStore,
            &[
                ("WMLtypeIn", object_type),
                ("QueryIn", query_xml),
                ("OptionsIn", options.as_str()),
            ],
        )?;
        GetReply::from_response(&response)
    }

    /// `WMLS_AddToStore`
    pub fn add_to_store(&self, object_type: &str, xml: &str) -> Result<StoreReply> {
        let response = self.invoke(
            StoreOperation::AddToStore,
            &[("WMLtypeIn", object_type), ("XMLin", xml)],
        )?;
        StoreReply::from_response(&response)
    }

    /// `WMLS_UpdateInStore`
    pub fn update_in_store(&self, object_type: &str, xml: &str) -> Result<StoreReply> {
        let response = self.invoke(
            StoreOperation::UpdateInStore,
            &[("WMLtypeIn", object_type), ("XMLin", xml)],
        )?;
        StoreReply::from_response(&response)
    }

    /// `WMLS_DeleteFromStore`
    pub fn delete_from_store(&self, object_type: &str, xml: &str) -> Result<StoreReply> {
        let response = self.invoke(
            StoreOperation::DeleteFromStore,
            &[("WMLtypeIn", object_type), ("QueryIn", xml)],
        )?;
        StoreReply::from_response(&response)
    }

    /// `WMLS_GetVersion`: comma-separated data schema versions
    pub fn get_version(&self) -> Result<String> {
        let response = self.invoke(StoreOperation::GetVersion, &[])?;
        Ok(result_text(&response)?.to_string())
    }

    /// `WMLS_GetBaseMsg`: text for a return code
    pub fn get_base_msg(&self, code: i16) -> Result<String> {
        base_msg(self.transport()?, code)
    }

    fn transport(&self) -> Result<&dyn Transport> {
        self.session
            .as_deref()
            .ok_or(WitsmlError::ClientNotConnected)
    }

    fn invoke(&self, operation: StoreOperation, params: &[(&str, &str)]) -> Result<XmlNode> {
        call(self.transport()?, operation, params)
    }
}

impl Default for WitsmlClient {
    fn default() -> Self {
        Self::new()
    }
}

/// One encoded round trip
fn call(
    transport: &dyn Transport,
    operation: StoreOperation,
    params: &[(&str, &str)],
) -> Result<XmlNode> {
    let envelope = soap::encode_request(operation, params);
    tracing::trace!("Sending {}: {}", operation.name(), envelope);

    let body = transport.call(operation, &envelope)?;
    tracing::trace!("Received {} response: {}", operation.name(), body);

    soap::decode_response(&body)
}

fn base_msg(transport: &dyn Transport, code: i16) -> Result<String> {
    let code = code.to_string();
    let response = call(transport, StoreOperation::GetBaseMsg, &[("ReturnValueIn", code.as_str())])?;
    Ok(result_text(&response)?.to_string())
}
