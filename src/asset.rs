//! The asset record exchanged with the ledger backend.

use serde::{Deserialize, Serialize};

/// The status given to newly created assets.
pub const DEFAULT_STATUS: &str = "active";
/// The transaction amount given to newly created assets.
pub const DEFAULT_TRANSACTION_AMOUNT: &str = "0";
/// The transaction type given to newly created assets.
pub const DEFAULT_TRANSACTION_TYPE: &str = "init";

/// A dealer account tracked by the backend.
///
/// Numeric-valued fields are kept as strings since the backend owns their
/// shape and the client never does arithmetic on them. Fields missing from a
/// JSON payload decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    /// The key used to address the asset, immutable once created.
    #[serde(rename = "DEALERID")]
    pub dealer_id: String,
    /// The phone number associated with the dealer.
    #[serde(rename = "MSISDN")]
    pub msisdn: String,
    /// The dealer's PIN, sent to the backend in plaintext.
    #[serde(rename = "MPIN")]
    pub mpin: String,
    /// The account balance.
    #[serde(rename = "BALANCE")]
    pub balance: String,
    /// The account status, e.g. "active".
    #[serde(rename = "STATUS")]
    pub status: String,
    /// The amount of the last transaction.
    #[serde(rename = "TRANSAMOUNT")]
    pub transaction_amount: String,
    /// The type of the last transaction, e.g. "init".
    #[serde(rename = "TRANSTYPE")]
    pub transaction_type: String,
    /// Free text.
    #[serde(rename = "REMARKS")]
    pub remarks: String,
}

impl Asset {
    /// An asset with the defaults used by the create form.
    pub fn new_draft() -> Self {
        Self {
            status: DEFAULT_STATUS.to_owned(),
            transaction_amount: DEFAULT_TRANSACTION_AMOUNT.to_owned(),
            transaction_type: DEFAULT_TRANSACTION_TYPE.to_owned(),
            ..Default::default()
        }
    }

    /// Get the value of `field`.
    pub fn field(&self, field: AssetField) -> &str {
        match field {
            AssetField::DealerId => &self.dealer_id,
            AssetField::Msisdn => &self.msisdn,
            AssetField::Mpin => &self.mpin,
            AssetField::Balance => &self.balance,
            AssetField::Status => &self.status,
            AssetField::TransactionAmount => &self.transaction_amount,
            AssetField::TransactionType => &self.transaction_type,
            AssetField::Remarks => &self.remarks,
        }
    }

    /// Get a mutable reference to the value of `field`.
    pub fn field_mut(&mut self, field: AssetField) -> &mut String {
        match field {
            AssetField::DealerId => &mut self.dealer_id,
            AssetField::Msisdn => &mut self.msisdn,
            AssetField::Mpin => &mut self.mpin,
            AssetField::Balance => &mut self.balance,
            AssetField::Status => &mut self.status,
            AssetField::TransactionAmount => &mut self.transaction_amount,
            AssetField::TransactionType => &mut self.transaction_type,
            AssetField::Remarks => &mut self.remarks,
        }
    }
}

/// Names one of the fields of an [Asset].
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetField {
    DealerId,
    Msisdn,
    Mpin,
    Balance,
    Status,
    TransactionAmount,
    TransactionType,
    Remarks,
}

impl AssetField {
    /// The name of the field in JSON payloads and HTML forms.
    pub fn name(self) -> &'static str {
        match self {
            AssetField::DealerId => "DEALERID",
            AssetField::Msisdn => "MSISDN",
            AssetField::Mpin => "MPIN",
            AssetField::Balance => "BALANCE",
            AssetField::Status => "STATUS",
            AssetField::TransactionAmount => "TRANSAMOUNT",
            AssetField::TransactionType => "TRANSTYPE",
            AssetField::Remarks => "REMARKS",
        }
    }
}

/// The form data posted by the asset editor.
///
/// A field is `None` when the browser did not send it, e.g. the disabled
/// dealer ID input while editing.
#[allow(missing_docs)]
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetForm {
    #[serde(rename = "DEALERID", skip_serializing_if = "Option::is_none")]
    pub dealer_id: Option<String>,
    #[serde(rename = "MSISDN", skip_serializing_if = "Option::is_none")]
    pub msisdn: Option<String>,
    #[serde(rename = "MPIN", skip_serializing_if = "Option::is_none")]
    pub mpin: Option<String>,
    #[serde(rename = "BALANCE", skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(rename = "STATUS", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "TRANSAMOUNT", skip_serializing_if = "Option::is_none")]
    pub transaction_amount: Option<String>,
    #[serde(rename = "TRANSTYPE", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    #[serde(rename = "REMARKS", skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl AssetForm {
    /// The fields present in the form, paired with their values.
    pub fn fields(&self) -> impl Iterator<Item = (AssetField, &str)> {
        [
            (AssetField::DealerId, &self.dealer_id),
            (AssetField::Msisdn, &self.msisdn),
            (AssetField::Mpin, &self.mpin),
            (AssetField::Balance, &self.balance),
            (AssetField::Status, &self.status),
            (AssetField::TransactionAmount, &self.transaction_amount),
            (AssetField::TransactionType, &self.transaction_type),
            (AssetField::Remarks, &self.remarks),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|value| (field, value)))
    }
}
