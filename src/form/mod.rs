//! Self-certification submission form.
//!
//! Pure form state plus the transitions driven by user input and by the
//! backend collaborators in [`services`]. The form moves between two phases:
//! `Editing` and `Submitted`. Validation failures and service errors are
//! reported through a [`Notifier`] and never change the form state, so the
//! user can fix the input and retry.

pub mod services;

pub use services::{
    CertificationPayload, CertificationService, PricingInfo, PricingService, ServiceError,
    UploadedFileInfo, UserInfo, UserInfoService,
};

use crate::model::{DocumentId, RecordId};
use crate::notify::{Notification, Notifier};
use chrono::{NaiveDate, Utc};
use thiserror::Error;
use tracing::{info, warn};

/// Shown where a profile or pricing value is unavailable.
pub const NOT_AVAILABLE: &str = "N/A";

/// Certification period offered by the form.
pub const DEFAULT_PERIOD: &str = "6 month";

/// Reasons a submission was not sent or not accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required checkbox is unchecked.
    #[error("Please check confirmation and e-signature boxes.")]
    ConfirmationRequired,

    /// No supporting document is attached.
    #[error("Please upload a PDF before submitting.")]
    UploadRequired,

    /// The form is showing a submitted certification.
    #[error("Form was already submitted")]
    AlreadySubmitted,

    /// The certification service rejected the request.
    #[error("Error submitting certification.")]
    Service(#[source] ServiceError),
}

/// A supporting document attached to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    /// Identifier of the stored document.
    pub document_id: DocumentId,
    /// Relative download link for the document.
    pub download_url: String,
}

/// Read-only summary shown after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedCertification {
    /// Id of the created record.
    pub record_id: RecordId,
    /// Submitting user.
    pub user_name: String,
    /// Country the certification applies to.
    pub country: String,
    /// Period label, e.g. `6 month`.
    pub certification_period: String,
    /// Date of the certification.
    pub certification_date: NaiveDate,
    /// Free-text comments.
    pub comments: String,
    /// Confirmation checkbox state.
    pub confirmation: bool,
    /// E-signature checkbox state.
    pub e_signature: bool,
}

/// Which screen the form shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    /// Inputs are editable.
    Editing,
    /// Read-only summary of an accepted submission.
    Submitted(SubmittedCertification),
}

/// Submission form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationForm {
    user_name: String,
    country: String,
    price: String,
    certification_period: String,
    certification_date: NaiveDate,
    comments: String,
    confirmation: bool,
    e_signature: bool,
    upload: Option<UploadedDocument>,
    record_id: Option<RecordId>,
    phase: FormPhase,
}

impl CertificationForm {
    /// Empty form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            user_name: String::new(),
            country: String::new(),
            price: NOT_AVAILABLE.to_string(),
            certification_period: DEFAULT_PERIOD.to_string(),
            certification_date: today,
            comments: String::new(),
            confirmation: false,
            e_signature: false,
            upload: None,
            record_id: None,
            phase: FormPhase::Editing,
        }
    }

    /// Empty form dated with the current UTC calendar date.
    pub fn for_today() -> Self {
        Self::new(Utc::now().date_naive())
    }

    /// Load profile and pricing data.
    ///
    /// A user-info failure is logged and leaves the profile blank. Pricing
    /// overrides the profile country; a pricing failure sets both country and
    /// price to `N/A`.
    pub fn mount(&mut self, users: &mut dyn UserInfoService, pricing: &mut dyn PricingService) {
        match users.user_info() {
            Ok(info) => {
                self.user_name = info.user_name;
                self.country = info.country;
            }
            Err(err) => warn!(error = %err, "Failed to load user info"),
        }

        match pricing.pricing_for_user_country() {
            Ok(pricing) => {
                self.country = pricing.country;
                self.price = format_price(pricing.price);
            }
            Err(err) => {
                warn!(error = %err, "Failed to load pricing");
                self.country = NOT_AVAILABLE.to_string();
                self.price = NOT_AVAILABLE.to_string();
            }
        }
    }

    // ----- Input -----

    /// Replace the comments text.
    pub fn set_comments(&mut self, comments: impl Into<String>) {
        self.comments = comments.into();
    }

    /// Set the confirmation checkbox.
    pub fn set_confirmation(&mut self, checked: bool) {
        self.confirmation = checked;
    }

    /// Set the e-signature checkbox.
    pub fn set_e_signature(&mut self, checked: bool) {
        self.e_signature = checked;
    }

    /// Record the first uploaded file. An empty upload list is ignored.
    pub fn upload_finished(&mut self, files: &[UploadedFileInfo], notifier: &mut dyn Notifier) {
        let Some(file) = files.first() else {
            return;
        };
        let document_id = match DocumentId::new(file.document_id.as_str()) {
            Ok(id) => id,
            Err(err) => {
                warn!(file = %file.name, error = %err, "Upload reported without a document id");
                return;
            }
        };

        let download_url = document_id.download_url();
        info!(file = %file.name, url = %download_url, "File uploaded");
        self.upload = Some(UploadedDocument {
            document_id,
            download_url,
        });
        notifier.notify(Notification::success(
            "File Upload",
            "File uploaded successfully.",
        ));
    }

    // ----- Submission -----

    /// Check the form can be submitted.
    ///
    /// # Errors
    ///
    /// `ConfirmationRequired` if either checkbox is unchecked, then
    /// `UploadRequired` if no document is attached.
    pub fn validate(&self) -> Result<(), FormError> {
        if !self.confirmation || !self.e_signature {
            return Err(FormError::ConfirmationRequired);
        }
        if self.upload.is_none() {
            return Err(FormError::UploadRequired);
        }
        Ok(())
    }

    /// Request body for the create call.
    pub fn payload(&self) -> CertificationPayload {
        CertificationPayload {
            certification_period: self.certification_period.clone(),
            certification_date: self.certification_date.format("%Y-%m-%d").to_string(),
            country: self.country.clone(),
            comments: self.comments.clone(),
            confirmation: self.confirmation,
            e_signature: self.e_signature,
            content_document_id: self.upload.as_ref().map(|u| u.document_id.clone()),
        }
    }

    /// Validate and send the certification.
    ///
    /// Every failure is also notified as an error; form state is unchanged.
    ///
    /// # Errors
    ///
    /// Returns the validation failure, `AlreadySubmitted`, or `Service`.
    pub fn submit(
        &mut self,
        service: &mut dyn CertificationService,
        notifier: &mut dyn Notifier,
    ) -> Result<RecordId, FormError> {
        let checked = if self.is_submitted() {
            Err(FormError::AlreadySubmitted)
        } else {
            self.validate()
        };
        if let Err(err) = checked {
            notifier.notify(Notification::error("Error", err.to_string()));
            return Err(err);
        }

        let payload = self.payload();
        let record_id = match service.create_certification(&payload) {
            Ok(id) => id,
            Err(err) => {
                warn!(error = %err, "Certification submission failed");
                let err = FormError::Service(err);
                notifier.notify(Notification::error("Error", err.to_string()));
                return Err(err);
            }
        };

        info!(record_id = %record_id, "Certification submitted");
        self.record_id = Some(record_id.clone());
        self.phase = FormPhase::Submitted(SubmittedCertification {
            record_id: record_id.clone(),
            user_name: self.user_name.clone(),
            country: self.country.clone(),
            certification_period: self.certification_period.clone(),
            certification_date: self.certification_date,
            comments: self.comments.clone(),
            confirmation: self.confirmation,
            e_signature: self.e_signature,
        });
        notifier.notify(Notification::success(
            "Success",
            "Certification submitted successfully.",
        ));
        Ok(record_id)
    }

    /// Return to editing with a cleared form. Profile and pricing are kept.
    pub fn back(&mut self) {
        self.phase = FormPhase::Editing;
        self.comments.clear();
        self.confirmation = false;
        self.e_signature = false;
        self.upload = None;
        self.record_id = None;
    }

    // ----- Accessors -----

    /// Name of the current user, blank until mounted.
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Country shown on the form.
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Formatted price or `N/A`.
    pub fn price(&self) -> &str {
        &self.price
    }

    /// Certification period label.
    pub fn certification_period(&self) -> &str {
        &self.certification_period
    }

    /// Date stamped on the certification.
    pub fn certification_date(&self) -> NaiveDate {
        self.certification_date
    }

    /// Current comments text.
    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// Confirmation checkbox state.
    pub fn confirmation(&self) -> bool {
        self.confirmation
    }

    /// E-signature checkbox state.
    pub fn e_signature(&self) -> bool {
        self.e_signature
    }

    /// Attached document, if any.
    pub fn upload(&self) -> Option<&UploadedDocument> {
        self.upload.as_ref()
    }

    /// Submit stays disabled until a file has been attached.
    pub fn is_submit_enabled(&self) -> bool {
        self.upload.is_some()
    }

    /// Id returned by the last successful submission.
    pub fn record_id(&self) -> Option<&RecordId> {
        self.record_id.as_ref()
    }

    /// Current phase.
    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    /// True once a submission has been accepted.
    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, FormPhase::Submitted(_))
    }
}

fn format_price(price: Option<f64>) -> String {
    price
        .map(|p| format!("{p:.2}"))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
