//! Configuration for witsml-log
//!
//! Centralized configuration with sensible defaults.

/// WITSML data schema namespace for 1.4.x object documents
pub const WITSML_NAMESPACE: &str = "http://www.witsml.org/schemas/1series";

/// Data schema version stamped on every generated document
pub const WITSML_VERSION: &str = "1.4.1.1";

/// Namespace and version carried on the `logs` root element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSchema {
    namespace: String,
    version: String,
}

impl DocumentSchema {
    pub fn new(namespace: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            version: version.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

impl Default for DocumentSchema {
    fn default() -> Self {
        Self::new(WITSML_NAMESPACE, WITSML_VERSION)
    }
}

/// Main configuration for a witsml-log client
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Document Configuration
    // -------------------------------------------------------------------------
    /// Namespace/version for generated documents
    pub schema: DocumentSchema,

    // -------------------------------------------------------------------------
    // Transport Configuration
    // -------------------------------------------------------------------------
    /// Whole-request timeout (milliseconds)
    pub request_timeout_ms: u64,

    /// TCP/TLS connect timeout (milliseconds)
    pub connect_timeout_ms: u64,

    /// Retry `connect` once without certificate verification when the
    /// first attempt fails TLS verification
    pub retry_insecure_on_tls_failure: bool,

    /// User-Agent header sent with every SOAP request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: DocumentSchema::default(),
            request_timeout_ms: 30_000,
            connect_timeout_ms: 10_000,
            retry_insecure_on_tls_failure: true,
            user_agent: format!("witsml-log/{}", crate::VERSION),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the document schema injected into the generator
    pub fn schema(mut self, schema: DocumentSchema) -> Self {
        self.config.schema = schema;
        self
    }

    /// Set the request timeout (in milliseconds)
    pub fn request_timeout_ms(mut self, ms: u64) -> Self {
        self.config.request_timeout_ms = ms;
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Enable or disable the insecure retry after a TLS verification failure
    pub fn retry_insecure_on_tls_failure(mut self, enabled: bool) -> Self {
        self.config.retry_insecure_on_tls_failure = enabled;
        self
    }

    /// Set the User-Agent header
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
