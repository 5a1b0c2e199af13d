use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Acknowledgement returned by mutating endpoints.
///
/// The backend only guarantees an identifier and a status; anything else it
/// returns is kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OperationReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
