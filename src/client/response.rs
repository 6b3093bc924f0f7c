//! Response definitions
//!
//! Typed replies of the store operations.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, WitsmlError};
use crate::xml::XmlNode;

/// Reply of `WMLS_GetFromStore`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetReply {
    /// WITSML return code; positive on success
    pub result: i16,

    pub supp_msg_out: String,

    /// Returned objects, e.g. a `logs` document for [`parse_table`](crate::parse_table)
    pub xml_out: String,
}

impl GetReply {
    pub fn is_success(&self) -> bool {
        self.result > 0
    }

    pub(crate) fn from_response(response: &XmlNode) -> Result<Self> {
        Ok(Self {
            result: result_code(response)?,
            supp_msg_out: response.child_text("SuppMsgOut").to_string(),
            xml_out: response.child_text("XMLout").to_string(),
        })
    }
}

/// Reply of `WMLS_AddToStore`, `WMLS_UpdateInStore` and `WMLS_DeleteFromStore`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreReply {
    /// WITSML return code; positive on success
    pub result: i16,

    /// Supplemental message (the new uid after an add)
    pub supp_msg_out: String,
}

impl StoreReply {
    pub fn is_success(&self) -> bool {
        self.result > 0
    }

    pub(crate) fn from_response(response: &XmlNode) -> Result<Self> {
        Ok(Self {
            result: result_code(response)?,
            supp_msg_out: response.child_text("SuppMsgOut").to_string(),
        })
    }
}

/// Text of the `Result` element, which every store response carries
pub(crate) fn result_text(response: &XmlNode) -> Result<&str> {
    response.child("Result").map(XmlNode::text).ok_or_else(|| {
        WitsmlError::Protocol(format!("{} has no Result element", response.name()))
    })
}

fn result_code(response: &XmlNode) -> Result<i16> {
    let text = result_text(response)?;

    text.parse().map_err(|_| {
        WitsmlError::Protocol(format!("{} Result is not a return code: {:?}", response.name(), text))
    })
}

/// `returnElements` option of `WMLS_GetFromStore`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReturnElements {
    /// Every element and attribute
    All,

    IdOnly,

    HeaderOnly,

    /// Data block plus the mnemonic/unit lists
    DataOnly,

    StationLocationOnly,

    LatestChangeOnly,

    /// Only what the query template names (protocol default)
    #[default]
    Requested,
}

impl ReturnElements {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnElements::All => "all",
            ReturnElements::IdOnly => "id-only",
            ReturnElements::HeaderOnly => "header-only",
            ReturnElements::DataOnly => "data-only",
            ReturnElements::StationLocationOnly => "station-location-only",
            ReturnElements::LatestChangeOnly => "latest-change-only",
            ReturnElements::Requested => "requested",
        }
    }
}

impl fmt::Display for ReturnElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReturnElements {
    type Err = WitsmlError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(ReturnElements::All),
            "id-only" => Ok(ReturnElements::IdOnly),
            "header-only" => Ok(ReturnElements::HeaderOnly),
            "data-only" => Ok(ReturnElements::DataOnly),
            "station-location-only" => Ok(ReturnElements::StationLocationOnly),
            "latest-change-only" => Ok(ReturnElements::LatestChangeOnly),
            "requested" => Ok(ReturnElements::Requested),
            _ => Err(WitsmlError::Config(format!(
                "unknown returnElements value: {}",
                s
            ))),
        }
    }
}
