//! Form state for the commission and contact forms.
//!
//! Each form owns its raw field values and a [`SubmissionStatus`]. A
//! submission is split so the UI never holds the form across an `await`:
//!
//! 1. [`CommissionForm::begin_submit`] flips the status to `Submitting` and
//!    hands back an owned snapshot of the input.
//! 2. The snapshot's `run` performs the network chain.
//! 3. [`CommissionForm::finish`] applies the outcome: success clears every
//!    field, failure keeps them so the user can retry as-is.

use chrono::NaiveDate;

use crate::api::StudioApi;
use crate::error::{DraftError, Result};
use crate::model::{
    BudgetRange, CommissionRequest, CommissionType, ContactMessage, ContactRecord,
    ReferenceImageSet, SizePreference,
};
use crate::workflow::{self, CommissionOutcome};

/// Per-form feedback state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    /// The submit control is disabled exactly while this is true.
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}

/// Commission form inputs, keyed by their HTML `name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommissionField {
    ClientName,
    ClientEmail,
    ClientPhone,
    CommissionType,
    SubjectDescription,
    SizePreference,
    BudgetRange,
    Deadline,
    AdditionalNotes,
}

impl CommissionField {
    pub const ALL: [CommissionField; 9] = [
        CommissionField::ClientName,
        CommissionField::ClientEmail,
        CommissionField::ClientPhone,
        CommissionField::CommissionType,
        CommissionField::SubjectDescription,
        CommissionField::SizePreference,
        CommissionField::BudgetRange,
        CommissionField::Deadline,
        CommissionField::AdditionalNotes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CommissionField::ClientName => "client_name",
            CommissionField::ClientEmail => "client_email",
            CommissionField::ClientPhone => "client_phone",
            CommissionField::CommissionType => "commission_type",
            CommissionField::SubjectDescription => "subject_description",
            CommissionField::SizePreference => "size_preference",
            CommissionField::BudgetRange => "budget_range",
            CommissionField::Deadline => "deadline",
            CommissionField::AdditionalNotes => "additional_notes",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, CommissionField::Deadline | CommissionField::AdditionalNotes)
    }
}

/// Raw commission form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommissionDraft {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub commission_type: String,
    pub subject_description: String,
    pub size_preference: String,
    pub budget_range: String,
    pub deadline: String,
    pub additional_notes: String,
}

impl CommissionDraft {
    pub fn get(&self, field: CommissionField) -> &str {
        match field {
            CommissionField::ClientName => &self.client_name,
            CommissionField::ClientEmail => &self.client_email,
            CommissionField::ClientPhone => &self.client_phone,
            CommissionField::CommissionType => &self.commission_type,
            CommissionField::SubjectDescription => &self.subject_description,
            CommissionField::SizePreference => &self.size_preference,
            CommissionField::BudgetRange => &self.budget_range,
            CommissionField::Deadline => &self.deadline,
            CommissionField::AdditionalNotes => &self.additional_notes,
        }
    }

    pub fn set(&mut self, field: CommissionField, value: String) {
        let slot = match field {
            CommissionField::ClientName => &mut self.client_name,
            CommissionField::ClientEmail => &mut self.client_email,
            CommissionField::ClientPhone => &mut self.client_phone,
            CommissionField::CommissionType => &mut self.commission_type,
            CommissionField::SubjectDescription => &mut self.subject_description,
            CommissionField::SizePreference => &mut self.size_preference,
            CommissionField::BudgetRange => &mut self.budget_range,
            CommissionField::Deadline => &mut self.deadline,
            CommissionField::AdditionalNotes => &mut self.additional_notes,
        };
        *slot = value;
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Typed request for the wire.
    ///
    /// Formats (email, phone) are not checked here; the backend decides.
    /// Only emptiness and the fixed `<select>` choices are enforced, which the
    /// browser's `required` attributes already guarantee in practice.
    pub fn to_request(&self) -> Result<CommissionRequest, DraftError> {
        for field in CommissionField::ALL {
            if field.is_required() && self.get(field).is_empty() {
                return Err(DraftError::MissingField(field.name()));
            }
        }

        let commission_type = CommissionType::from_value(&self.commission_type).ok_or_else(|| {
            unknown(CommissionField::CommissionType, &self.commission_type)
        })?;
        let size_preference = SizePreference::from_value(&self.size_preference).ok_or_else(|| {
            unknown(CommissionField::SizePreference, &self.size_preference)
        })?;
        let budget_range = BudgetRange::from_value(&self.budget_range)
            .ok_or_else(|| unknown(CommissionField::BudgetRange, &self.budget_range))?;

        let deadline = if self.deadline.is_empty() {
            None
        } else {
            Some(
                NaiveDate::parse_from_str(&self.deadline, "%Y-%m-%d")
                    .map_err(|_| DraftError::InvalidDeadline(self.deadline.clone()))?,
            )
        };

        Ok(CommissionRequest {
            client_name: self.client_name.clone(),
            client_email: self.client_email.clone(),
            client_phone: self.client_phone.clone(),
            commission_type,
            subject_description: self.subject_description.clone(),
            size_preference,
            budget_range,
            deadline,
            additional_notes: non_empty(&self.additional_notes),
        })
    }
}

fn unknown(field: CommissionField, value: &str) -> DraftError {
    DraftError::UnknownOption {
        field: field.name(),
        value: value.to_string(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Contact form inputs. All of them are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn to_message(&self) -> Result<ContactMessage, DraftError> {
        if let Some(field) = ContactField::ALL.into_iter().find(|f| self.get(*f).is_empty()) {
            return Err(DraftError::MissingField(field.name()));
        }
        Ok(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

/// Commission form: draft, picked images and status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommissionForm {
    draft: CommissionDraft,
    images: ReferenceImageSet,
    status: SubmissionStatus,
    /// Generation of the latest file selection.
    selection: u64,
    reading_files: bool,
}

/// Handle for one in-flight read of picked files.
///
/// Only the ticket of the most recent selection can store its images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileReadTicket(u64);

impl CommissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &CommissionDraft {
        &self.draft
    }

    pub fn field(&self, field: CommissionField) -> &str {
        self.draft.get(field)
    }

    pub fn set_field(&mut self, field: CommissionField, value: String) {
        self.draft.set(field, value);
    }

    pub fn images(&self) -> &ReferenceImageSet {
        &self.images
    }

    /// Replace the selection, as a file `<input>` does on every change.
    pub fn set_images(&mut self, images: ReferenceImageSet) {
        self.images = images;
    }

    /// Note a new file selection whose contents are about to be read.
    ///
    /// Any read started earlier becomes stale.
    pub fn begin_file_read(&mut self) -> FileReadTicket {
        self.selection += 1;
        self.reading_files = true;
        FileReadTicket(self.selection)
    }

    /// Store the images of a finished read. Returns `false` and changes
    /// nothing when a newer selection has been made since `ticket` was issued.
    pub fn finish_file_read(&mut self, ticket: FileReadTicket, images: ReferenceImageSet) -> bool {
        if ticket.0 != self.selection {
            return false;
        }
        self.images = images;
        self.reading_files = false;
        true
    }

    pub fn is_reading_files(&self) -> bool {
        self.reading_files
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    /// Start a submission. Returns `None` while one is already in flight or
    /// while picked files are still being read.
    pub fn begin_submit(&mut self) -> Option<CommissionSubmission> {
        if self.is_submitting() || self.reading_files {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        Some(CommissionSubmission {
            draft: self.draft.clone(),
            images: self.images.clone(),
        })
    }

    pub fn finish(&mut self, outcome: &Result<CommissionOutcome>) {
        match outcome {
            Ok(_) => {
                self.draft = CommissionDraft::default();
                self.images.clear();
                self.selection += 1;
                self.reading_files = false;
                self.status = SubmissionStatus::Success;
            }
            Err(_) => self.status = SubmissionStatus::Error,
        }
    }
}

/// Owned input of one commission attempt.
#[derive(Debug, Clone)]
pub struct CommissionSubmission {
    draft: CommissionDraft,
    images: ReferenceImageSet,
}

impl CommissionSubmission {
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub async fn run<A: StudioApi>(self, api: &A) -> Result<CommissionOutcome> {
        let outcome = workflow::submit_commission(api, &self.draft, &self.images).await;
        if let Err(err) = &outcome {
            workflow::report_failure("commission", err);
        }
        outcome
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    status: SubmissionStatus,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn field(&self, field: ContactField) -> &str {
        self.draft.get(field)
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.draft.set(field, value);
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.is_submitting() {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        Some(ContactSubmission {
            draft: self.draft.clone(),
        })
    }

    pub fn finish(&mut self, outcome: &Result<ContactRecord>) {
        match outcome {
            Ok(_) => {
                self.draft = ContactDraft::default();
                self.status = SubmissionStatus::Success;
            }
            Err(_) => self.status = SubmissionStatus::Error,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    draft: ContactDraft,
}

impl ContactSubmission {
    pub async fn run<A: StudioApi>(self, api: &A) -> Result<ContactRecord> {
        let outcome = workflow::submit_contact(api, &self.draft).await;
        if let Err(err) = &outcome {
            workflow::report_failure("contact", err);
        }
        outcome
    }
}
