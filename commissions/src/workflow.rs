//! Submission chains and the startup health probe.
//!
//! A commission goes out in two dependent steps: create the record, then, only
//! if images were picked and the create succeeded, upload them against the id
//! the backend assigned. Contact messages are a single step.

use tracing::{error, info, warn};

use crate::api::StudioApi;
use crate::error::{ApiError, Result, SubmitError};
use crate::form::{CommissionDraft, ContactDraft};
use crate::model::{CommissionRecord, ContactRecord, HealthStatus, ReferenceImageSet, UploadReceipt};

/// What a successful commission chain produced.
#[derive(Debug, Clone, PartialEq)]
pub struct CommissionOutcome {
    pub record: CommissionRecord,
    /// `None` when no images were selected and the upload was skipped.
    pub upload: Option<UploadReceipt>,
}

/// Create the commission, then upload `images` if there are any.
///
/// The upload is never attempted when the create step fails.
pub async fn submit_commission<A: StudioApi>(
    api: &A,
    draft: &CommissionDraft,
    images: &ReferenceImageSet,
) -> Result<CommissionOutcome> {
    let request = draft.to_request()?;

    let record = api
        .create_commission(&request)
        .await
        .map_err(SubmitError::Create)?;
    if record.id.is_empty() {
        return Err(SubmitError::Create(ApiError::MissingRecordId));
    }
    info!(commission_id = %record.id, kind = request.commission_type.as_value(), "commission created");

    if images.is_empty() {
        return Ok(CommissionOutcome { record, upload: None });
    }

    let receipt = api
        .upload_reference_images(&record.id, images)
        .await
        .map_err(|source| SubmitError::Upload {
            commission_id: record.id.clone(),
            source,
        })?;
    info!(
        commission_id = %record.id,
        files = images.len(),
        message = %receipt.message,
        "reference images uploaded"
    );

    Ok(CommissionOutcome {
        record,
        upload: Some(receipt),
    })
}

pub async fn submit_contact<A: StudioApi>(api: &A, draft: &ContactDraft) -> Result<ContactRecord> {
    let message = draft.to_message()?;
    let record = api
        .send_contact_message(&message)
        .await
        .map_err(SubmitError::Contact)?;
    info!(message_id = %record.id, "contact message sent");
    Ok(record)
}

/// Log a failed chain. The UI only ever shows the generic error message.
pub(crate) fn report_failure(form: &'static str, err: &SubmitError) {
    error!(form, step = err.step(), error = %err, "submission failed");
}

/// Ping `/health` once and log the answer. Nothing else observes the result.
pub async fn probe_health<A: StudioApi>(api: &A) -> Option<HealthStatus> {
    match api.health().await {
        Ok(health) => {
            info!(status = %health.status, timestamp = ?health.timestamp, "API connected");
            Some(health)
        }
        Err(err) => {
            warn!(error = %err, "API connection failed");
            None
        }
    }
}
