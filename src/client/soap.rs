//! SOAP codec
//!
//! Encoding of store requests and decoding of store responses.
//!
//! ## Request Format
//! ```text
//! <soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
//!   <soap:Body>
//!     <ns:WMLS_GetFromStore xmlns:ns="http://www.witsml.org/message/120">
//!       <WMLtypeIn>log</WMLtypeIn>
//!       <QueryIn>&lt;logs ..&gt;</QueryIn>
//!       <OptionsIn>returnElements=all</OptionsIn>
//!     </ns:WMLS_GetFromStore>
//!   </soap:Body>
//! </soap:Envelope>
//! ```
//!
//! ### Response Format
//! `Envelope/Body/WMLS_<Op>Response` with `Result`, `SuppMsgOut`, `XMLout`
//! children, or `Envelope/Body/Fault` with `faultcode` and `faultstring`.

use quick_xml::escape::escape;

use crate::error::{Result, WitsmlError};
use crate::xml::XmlNode;

/// SOAP 1.1 envelope namespace
pub const SOAP_ENVELOPE_NS: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// WITSML store message namespace
pub const WITSML_MESSAGE_NS: &str = "http://www.witsml.org/message/120";

/// Prefix of every store `SOAPAction`
const SOAP_ACTION_PREFIX: &str = "http://www.witsml.org/action/120/Store.";

/// Store interface operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOperation {
    GetFromStore,
    AddToStore,
    UpdateInStore,
    DeleteFromStore,
    GetBaseMsg,
    GetVersion,
}

impl StoreOperation {
    /// Body element name
    pub fn name(&self) -> &'static str {
        match self {
            StoreOperation::GetFromStore => "WMLS_GetFromStore",
            StoreOperation::AddToStore => "WMLS_AddToStore",
            StoreOperation::UpdateInStore => "WMLS_UpdateInStore",
            StoreOperation::DeleteFromStore => "WMLS_DeleteFromStore",
            StoreOperation::GetBaseMsg => "WMLS_GetBaseMsg",
            StoreOperation::GetVersion => "WMLS_GetVersion",
        }
    }

    /// `SOAPAction` header value
    pub fn soap_action(&self) -> String {
        format!("{}{}", SOAP_ACTION_PREFIX, self.name())
    }
}

/// Encode a request envelope
///
/// `params` become unqualified, escaped child elements in order. Skipped
/// parameters are simply not passed.
pub fn encode_request(operation: StoreOperation, params: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for &(name, value) in params {
        body.push_str(&format!("<{0}>{1}</{0}>", name, escape(value)));
    }

    format!(
        concat!(
            r#"<?xml version="1.0" encoding="utf-8"?>"#,
            r#"<soap:Envelope xmlns:soap="{ns}"><soap:Body>"#,
            r#"<ns:{op} xmlns:ns="{msg}">{body}</ns:{op}>"#,
            r#"</soap:Body></soap:Envelope>"#
        ),
        ns = SOAP_ENVELOPE_NS,
        op = operation.name(),
        msg = WITSML_MESSAGE_NS,
        body = body,
    )
}

/// Decode a response envelope into its response element
///
/// Fails with [`WitsmlError::SoapFault`] when the body carries a fault.
pub fn decode_response(envelope: &str) -> Result<XmlNode> {
    let root = XmlNode::parse(envelope)?;
    if root.name() != "Envelope" {
        return Err(WitsmlError::Protocol(format!(
            "expected SOAP Envelope, got <{}>",
            root.name()
        )));
    }

    let body = root
        .into_child("Body")
        .ok_or_else(|| WitsmlError::Protocol("SOAP envelope has no Body".to_string()))?;

    let response = body
        .children()
        .first()
        .ok_or_else(|| WitsmlError::Protocol("SOAP Body is empty".to_string()))?;

    if response.name() == "Fault" {
        return Err(WitsmlError::SoapFault {
            code: response.child_text("faultcode").to_string(),
            message: response.child_text("faultstring").to_string(),
        });
    }

    Ok(response.clone())
}
