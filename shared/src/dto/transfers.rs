use serde::{Deserialize, Serialize};

/// How a counterparty is addressed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecipientKind {
    Email,
    Phone,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    #[serde(rename = "type")]
    pub kind: RecipientKind,
    pub value: String,
}

impl Recipient {
    /// Address by email when the value looks like one, by phone otherwise.
    pub fn infer(value: impl Into<String>) -> Self {
        let value = value.into();
        let kind = if value.contains('@') {
            RecipientKind::Email
        } else {
            RecipientKind::Phone
        };
        Self { kind, value }
    }

    pub fn email(value: impl Into<String>) -> Self {
        Self {
            kind: RecipientKind::Email,
            value: value.into(),
        }
    }
}

/// Body of `POST /api/v1/transfers` and `POST /api/v1/transfer-requests`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub recipient: Recipient,
    pub amount: String,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
