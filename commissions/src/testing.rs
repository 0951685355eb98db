//! In-memory `StudioApi` that records every call.

use std::cell::RefCell;

use crate::api::StudioApi;
use crate::error::ApiError;
use crate::form::{CommissionDraft, CommissionField, ContactDraft, ContactField};
use crate::model::{
    CommissionRecord, CommissionRequest, ContactMessage, ContactRecord, HealthStatus,
    ReferenceImageSet, UploadReceipt,
};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Health,
    Create(CommissionRequest),
    Upload {
        commission_id: String,
        files: Vec<String>,
    },
    Contact(ContactMessage),
}

pub(crate) struct RecordingApi {
    calls: RefCell<Vec<Call>>,
    commission_id: String,
    fail_create: bool,
    fail_upload: bool,
    fail_contact: bool,
    fail_health: bool,
}

impl Default for RecordingApi {
    fn default() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            commission_id: "c-1".to_string(),
            fail_create: false,
            fail_upload: false,
            fail_contact: false,
            fail_health: false,
        }
    }
}

impl RecordingApi {
    pub(crate) fn with_commission_id(mut self, id: &str) -> Self {
        self.commission_id = id.to_string();
        self
    }

    pub(crate) fn failing_create(mut self) -> Self {
        self.fail_create = true;
        self
    }

    pub(crate) fn failing_upload(mut self) -> Self {
        self.fail_upload = true;
        self
    }

    pub(crate) fn failing_contact(mut self) -> Self {
        self.fail_contact = true;
        self
    }

    pub(crate) fn failing_health(mut self) -> Self {
        self.fail_health = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

fn rejected(endpoint: &str, status: u16) -> ApiError {
    ApiError::Rejected {
        endpoint: endpoint.to_string(),
        status,
        detail: "Internal Server Error".to_string(),
    }
}

impl StudioApi for RecordingApi {
    async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.record(Call::Health);
        if self.fail_health {
            return Err(rejected("/health", 503));
        }
        Ok(HealthStatus {
            status: "healthy".into(),
            timestamp: Some("2026-10-17T09:00:00".into()),
        })
    }

    async fn create_commission(&self, request: &CommissionRequest) -> Result<CommissionRecord, ApiError> {
        self.record(Call::Create(request.clone()));
        if self.fail_create {
            return Err(rejected("/commissions", 500));
        }
        Ok(CommissionRecord {
            id: self.commission_id.clone(),
            client_name: request.client_name.clone(),
            client_email: request.client_email.clone(),
            status: "pending".into(),
            reference_images: Vec::new(),
            price_quoted: None,
            created_at: None,
            updated_at: None,
        })
    }

    async fn upload_reference_images(
        &self,
        commission_id: &str,
        images: &ReferenceImageSet,
    ) -> Result<UploadReceipt, ApiError> {
        self.record(Call::Upload {
            commission_id: commission_id.to_string(),
            files: images.iter().map(|i| i.file_name.clone()).collect(),
        });
        if self.fail_upload {
            return Err(rejected("/upload-images", 404));
        }
        Ok(UploadReceipt {
            message: format!("Uploaded {} reference images successfully", images.len()),
        })
    }

    async fn send_contact_message(&self, message: &ContactMessage) -> Result<ContactRecord, ApiError> {
        self.record(Call::Contact(message.clone()));
        if self.fail_contact {
            return Err(rejected("/contact", 422));
        }
        Ok(ContactRecord {
            id: "msg-1".into(),
            created_at: None,
        })
    }
}

pub(crate) fn filled_commission_draft() -> CommissionDraft {
    let mut draft = CommissionDraft::default();
    for (field, value) in [
        (CommissionField::ClientName, "Meera Iyer"),
        (CommissionField::ClientEmail, "meera@example.com"),
        (CommissionField::ClientPhone, "+91 90000 12345"),
        (CommissionField::CommissionType, "portrait"),
        (CommissionField::SubjectDescription, "Portrait of my grandmother"),
        (CommissionField::SizePreference, "large"),
        (CommissionField::BudgetRange, "flexible"),
    ] {
        draft.set(field, value.to_string());
    }
    draft
}

pub(crate) fn filled_contact_draft() -> ContactDraft {
    let mut draft = ContactDraft::default();
    for (field, value) in [
        (ContactField::Name, "Ravi"),
        (ContactField::Email, "ravi@example.com"),
        (ContactField::Subject, "Turnaround"),
        (ContactField::Message, "How long does an A3 portrait take?"),
    ] {
        draft.set(field, value.to_string());
    }
    draft
}
