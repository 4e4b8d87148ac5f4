//! Backend collaborators used by the submission form.
//!
//! Each is an opaque request/response boundary: a call either succeeds with
//! a payload or fails with a reason string.

use crate::model::{DocumentId, RecordId};
use serde::{Deserialize, Serialize};

/// Profile fields of the current user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    /// Display name of the user.
    pub user_name: String,
    /// Country on the user's profile.
    pub country: String,
}

/// Certification price for the user's country.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricingInfo {
    /// Country the price applies to.
    pub country: String,
    /// Absent when no price is configured for the country.
    pub price: Option<f64>,
}

/// A file reported by the upload widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFileInfo {
    /// Original file name.
    pub name: String,
    /// Identifier assigned by the document store.
    pub document_id: String,
}

/// Request body of the create-certification call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationPayload {
    /// Period label.
    pub certification_period: String,
    /// `YYYY-MM-DD`.
    pub certification_date: String,
    /// Country being certified.
    pub country: String,
    /// Free-text comments.
    pub comments: String,
    /// Confirmation checkbox.
    pub confirmation: bool,
    /// E-signature checkbox.
    pub e_signature: bool,
    /// Attached supporting document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_document_id: Option<DocumentId>,
}

/// Failure reported by a collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ServiceError(pub String);

/// Source of the current user's profile.
pub trait UserInfoService {
    /// Fetch the profile of the current user.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` when the profile cannot be loaded.
    fn user_info(&mut self) -> Result<UserInfo, ServiceError>;
}

/// Source of certification pricing.
pub trait PricingService {
    /// Price for the current user's country.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` when pricing cannot be loaded.
    fn pricing_for_user_country(&mut self) -> Result<PricingInfo, ServiceError>;
}

/// Backend that stores submitted certifications.
pub trait CertificationService {
    /// Create the certification record and return its id.
    fn create_certification(
        &mut self,
        payload: &CertificationPayload,
    ) -> Result<RecordId, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_with_camel_case_keys() {
        let payload = CertificationPayload {
            certification_period: "6 month".to_string(),
            certification_date: "2024-06-01".to_string(),
            country: "US".to_string(),
            comments: "ok".to_string(),
            confirmation: true,
            e_signature: true,
            content_document_id: Some(DocumentId::new("069A").unwrap()),
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["certificationPeriod"], "6 month");
        assert_eq!(json["eSignature"], true);
        assert_eq!(json["contentDocumentId"], "069A");
    }

    #[test]
    fn payload_omits_missing_document() {
        let payload = CertificationPayload {
            certification_period: "6 month".to_string(),
            certification_date: "2024-06-01".to_string(),
            country: "US".to_string(),
            comments: String::new(),
            confirmation: true,
            e_signature: true,
            content_document_id: None,
        };

        let json = serde_json::to_value(&payload).unwrap();

        assert!(json.get("contentDocumentId").is_none());
    }

    #[test]
    fn user_info_deserializes_from_camel_case() {
        let info: UserInfo =
            serde_json::from_str(r#"{"userName":"Ada","country":"UK"}"#).unwrap();
        assert_eq!(info.user_name, "Ada");
    }
}
