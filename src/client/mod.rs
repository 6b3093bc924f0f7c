//! Client Module
//!
//! SOAP client for the WITSML store interface (`WMLS_*` operations).
//!
//! ## Layers
//! - `soap`: envelope encoding and response decoding
//! - `transport`: the [`Transport`] seam and the blocking HTTP implementation
//! - `response`: typed replies
//! - `witsml`: [`WitsmlClient`], session state and store operations
//!
//! ## Session
//! `connect` probes the store with `WMLS_GetBaseMsg(1)`; the transport only
//! becomes the session when the probe answers
//! `"Function completed successfully"`. Store calls without a session fail
//! with `ClientNotConnected`.

mod response;
mod soap;
mod transport;
mod witsml;

pub use response::{GetReply, ReturnElements, StoreReply};
pub use soap::{encode_request, decode_response, StoreOperation, SOAP_ENVELOPE_NS, WITSML_MESSAGE_NS};
pub use transport::{HttpTransport, TlsVerification, Transport};
pub use witsml::{WitsmlClient, BASE_MSG_SUCCESS};
