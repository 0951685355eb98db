//! Wire and form data types for commission and contact intake.
//!
//! Request types serialize to the JSON bodies the studio backend accepts.
//! Record types deserialize what it sends back; unknown fields are ignored so
//! the backend can grow its models without breaking the site.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of artwork a client is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommissionType {
    Portrait,
    Family,
    Traditional,
    Abstract,
    Other,
}

impl CommissionType {
    /// Every variant in the order the form lists them.
    pub const ALL: [CommissionType; 5] = [
        CommissionType::Portrait,
        CommissionType::Family,
        CommissionType::Traditional,
        CommissionType::Abstract,
        CommissionType::Other,
    ];

    /// Value submitted by the `<select>` and sent over the wire.
    pub fn as_value(&self) -> &'static str {
        match self {
            CommissionType::Portrait => "portrait",
            CommissionType::Family => "family",
            CommissionType::Traditional => "traditional",
            CommissionType::Abstract => "abstract",
            CommissionType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommissionType::Portrait => "Portrait",
            CommissionType::Family => "Family Portrait",
            CommissionType::Traditional => "Traditional Art",
            CommissionType::Abstract => "Abstract Art",
            CommissionType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_value() == value)
    }
}

/// Paper size the client would like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizePreference {
    Small,
    Medium,
    Large,
}

impl SizePreference {
    pub const ALL: [SizePreference; 3] = [
        SizePreference::Small,
        SizePreference::Medium,
        SizePreference::Large,
    ];

    pub fn as_value(&self) -> &'static str {
        match self {
            SizePreference::Small => "small",
            SizePreference::Medium => "medium",
            SizePreference::Large => "large",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizePreference::Small => "Small (A4)",
            SizePreference::Medium => "Medium (A3)",
            SizePreference::Large => "Large (A2 or bigger)",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_value() == value)
    }
}

/// Fixed budget brackets offered on the commission form.
///
/// The wire value is the bracket string itself (`"4400-8000"`), which is what
/// the backend stores verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetRange {
    #[serde(rename = "4400-8000")]
    Starter,
    #[serde(rename = "8000-15000")]
    Standard,
    #[serde(rename = "15000-23900")]
    Premium,
    #[serde(rename = "flexible")]
    Flexible,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 4] = [
        BudgetRange::Starter,
        BudgetRange::Standard,
        BudgetRange::Premium,
        BudgetRange::Flexible,
    ];

    pub fn as_value(&self) -> &'static str {
        match self {
            BudgetRange::Starter => "4400-8000",
            BudgetRange::Standard => "8000-15000",
            BudgetRange::Premium => "15000-23900",
            BudgetRange::Flexible => "flexible",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Starter => "₹4,400 - ₹8,000",
            BudgetRange::Standard => "₹8,000 - ₹15,000",
            BudgetRange::Premium => "₹15,000 - ₹23,900",
            BudgetRange::Flexible => "Flexible",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.as_value() == value)
    }
}

/// A commission request as posted to `POST /commissions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionRequest {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub commission_type: CommissionType,
    pub subject_description: String,
    pub size_preference: SizePreference,
    pub budget_range: BudgetRange,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

/// A message posted to `POST /contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// One user-selected reference image, already read into memory.
#[derive(Clone, PartialEq, Eq)]
pub struct ReferenceImage {
    pub file_name: String,
    /// MIME type reported by the browser; may be empty.
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ReferenceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReferenceImage")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ReferenceImage {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// MIME type to send in the multipart part.
    pub fn mime(&self) -> &str {
        if self.content_type.is_empty() {
            "application/octet-stream"
        } else {
            &self.content_type
        }
    }
}

/// Ordered reference images picked for a commission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceImageSet {
    images: Vec<ReferenceImage>,
}

impl ReferenceImageSet {
    pub fn new(images: Vec<ReferenceImage>) -> Self {
        Self { images }
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceImage> {
        self.images.iter()
    }

    pub fn total_bytes(&self) -> usize {
        self.images.iter().map(|i| i.bytes.len()).sum()
    }

    pub fn clear(&mut self) {
        self.images.clear();
    }
}

impl<'a> IntoIterator for &'a ReferenceImageSet {
    type Item = &'a ReferenceImage;
    type IntoIter = std::slice::Iter<'a, ReferenceImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}

/// Commission as stored by the backend (response of `POST /commissions`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionRecord {
    /// Empty when the backend omitted it; the workflow treats that as a failure.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_email: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub reference_images: Vec<String>,
    #[serde(default)]
    pub price_quoted: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_status() -> String {
    "pending".to_string()
}

/// Response of `POST /commissions/{id}/upload-images`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: String,
}

/// Response of `POST /contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}
