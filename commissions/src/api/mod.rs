//! Backend client abstraction.
//!
//! Every call the site makes to the studio backend goes through
//! [`StudioApi`]. The submission workflows are generic over it, which keeps
//! them testable without a network and lets the browser build plug in the
//! reqwest-based [`HttpStudioApi`].
//!
//! Futures are deliberately not `Send`: in the browser reqwest futures wrap JS
//! promises and run on the single UI thread.

use std::future::Future;

use crate::error::ApiError;
use crate::model::{
    CommissionRecord, CommissionRequest, ContactMessage, ContactRecord, HealthStatus,
    ReferenceImageSet, UploadReceipt,
};

mod http;

pub use http::HttpStudioApi;

/// Route paths relative to the API base.
pub mod routes {
    pub const HEALTH: &str = "/health";
    pub const COMMISSIONS: &str = "/commissions";
    pub const CONTACT: &str = "/contact";

    /// `/commissions/{id}/upload-images`, with the id percent-encoded as one
    /// path segment.
    pub fn upload_images(commission_id: &str) -> String {
        let id = urlencoding::encode(commission_id);
        format!("{COMMISSIONS}/{id}/upload-images")
    }
}

/// Multipart field name repeated once per reference image.
pub const UPLOAD_FIELD: &str = "files";

pub trait StudioApi {
    /// `GET /health`
    fn health(&self) -> impl Future<Output = Result<HealthStatus, ApiError>>;

    /// `POST /commissions` with the request as JSON.
    fn create_commission(
        &self,
        request: &CommissionRequest,
    ) -> impl Future<Output = Result<CommissionRecord, ApiError>>;

    /// `POST /commissions/{id}/upload-images` with every image as a `files` part.
    fn upload_reference_images(
        &self,
        commission_id: &str,
        images: &ReferenceImageSet,
    ) -> impl Future<Output = Result<UploadReceipt, ApiError>>;

    /// `POST /contact` with the message as JSON.
    fn send_contact_message(
        &self,
        message: &ContactMessage,
    ) -> impl Future<Output = Result<ContactRecord, ApiError>>;
}
