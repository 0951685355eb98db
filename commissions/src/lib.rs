//! # artzybear-commissions
//!
//! Everything behind the ArtzyBear studio page that is not DOM glue:
//!
//! - [`model`] - commission/contact request types and backend records
//! - [`portfolio`] - static gallery catalog and its category filter
//! - [`form`] - per-form field state and the submit/finish state machine
//! - [`workflow`] - the create-then-upload chain, contact send, health probe
//! - [`api`] - backend client trait and its reqwest implementation
//! - [`config`] - backend URL and log filter baked in at build time
//!
//! The crate builds for the host (where the tests run) and for
//! `wasm32-unknown-unknown`, where the `landing` app uses it.
//!
//! ```rust
//! use artzybear_commissions::form::{CommissionField, CommissionForm};
//!
//! let mut form = CommissionForm::new();
//! form.set_field(CommissionField::ClientName, "Meera".into());
//! let job = form.begin_submit().expect("idle form accepts a submission");
//! assert!(form.is_submitting());
//! assert!(form.begin_submit().is_none());
//! # drop(job);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod model;
pub mod portfolio;
pub mod workflow;

#[cfg(test)]
mod testing;

pub use api::{HttpStudioApi, StudioApi};
pub use config::SiteConfig;
pub use error::{ApiError, DraftError, SubmitError};
pub use form::{CommissionForm, ContactForm, SubmissionStatus};
