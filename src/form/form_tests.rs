//! Tests for the submission form.

use super::*;
use crate::notify::{NotificationLog, NotificationVariant};

// ===== Test doubles =====

struct Users(Result<UserInfo, ServiceError>);

impl UserInfoService for Users {
    fn user_info(&mut self) -> Result<UserInfo, ServiceError> {
        self.0.clone()
    }
}

struct Pricing(Result<PricingInfo, ServiceError>);

impl PricingService for Pricing {
    fn pricing_for_user_country(&mut self) -> Result<PricingInfo, ServiceError> {
        self.0.clone()
    }
}

#[derive(Default)]
struct Certifications {
    fail: bool,
    received: Vec<CertificationPayload>,
}

impl CertificationService for Certifications {
    fn create_certification(
        &mut self,
        payload: &CertificationPayload,
    ) -> Result<RecordId, ServiceError> {
        self.received.push(payload.clone());
        if self.fail {
            Err(ServiceError("insufficient access".to_string()))
        } else {
            Ok(RecordId::new("a0X000000000001").unwrap())
        }
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn users_ok() -> Users {
    Users(Ok(UserInfo {
        user_name: "Ada Lovelace".to_string(),
        country: "UK".to_string(),
    }))
}

fn pricing_ok(price: Option<f64>) -> Pricing {
    Pricing(Ok(PricingInfo {
        country: "United Kingdom".to_string(),
        price,
    }))
}

fn upload() -> Vec<UploadedFileInfo> {
    vec![UploadedFileInfo {
        name: "proof.pdf".to_string(),
        document_id: "069A000000001".to_string(),
    }]
}

/// Form with both boxes checked and a document attached.
fn ready_form(log: &mut NotificationLog) -> CertificationForm {
    let mut form = CertificationForm::new(today());
    form.mount(&mut users_ok(), &mut pricing_ok(Some(120.0)));
    form.set_comments("All good");
    form.set_confirmation(true);
    form.set_e_signature(true);
    form.upload_finished(&upload(), log);
    form
}

// ===== Mount =====

#[test]
fn new_form_has_defaults() {
    let form = CertificationForm::new(today());

    assert_eq!(form.certification_period(), "6 month");
    assert_eq!(form.certification_date(), today());
    assert_eq!(form.price(), "N/A");
    assert_eq!(form.phase(), &FormPhase::Editing);
    assert!(!form.is_submit_enabled());
}

#[test]
fn for_today_uses_utc_calendar_date() {
    let before = Utc::now().date_naive();
    let form = CertificationForm::for_today();
    let after = Utc::now().date_naive();

    let date = form.certification_date();
    assert!(date == before || date == after, "got {date}");
}

#[test]
fn mount_loads_profile_and_price() {
    let mut form = CertificationForm::new(today());

    form.mount(&mut users_ok(), &mut pricing_ok(Some(99.5)));

    assert_eq!(form.user_name(), "Ada Lovelace");
    assert_eq!(form.country(), "United Kingdom");
    assert_eq!(form.price(), "99.50");
}

#[test]
fn missing_price_shows_not_available() {
    let mut form = CertificationForm::new(today());

    form.mount(&mut users_ok(), &mut pricing_ok(None));

    assert_eq!(form.price(), "N/A");
    assert_eq!(form.country(), "United Kingdom");
}

#[test]
fn pricing_failure_marks_country_and_price_unavailable() {
    let mut form = CertificationForm::new(today());

    form.mount(
        &mut users_ok(),
        &mut Pricing(Err(ServiceError("no pricing".to_string()))),
    );

    assert_eq!(form.user_name(), "Ada Lovelace");
    assert_eq!(form.country(), "N/A");
    assert_eq!(form.price(), "N/A");
}

#[test]
fn user_info_failure_leaves_profile_blank() {
    let mut form = CertificationForm::new(today());

    form.mount(
        &mut Users(Err(ServiceError("down".to_string()))),
        &mut pricing_ok(Some(1.0)),
    );

    assert_eq!(form.user_name(), "");
    assert_eq!(form.country(), "United Kingdom");
}

// ===== Upload =====

#[test]
fn upload_stores_document_and_url() {
    let mut log = NotificationLog::default();
    let mut form = CertificationForm::new(today());

    form.upload_finished(&upload(), &mut log);

    let doc = form.upload().expect("document attached");
    assert_eq!(doc.document_id.as_str(), "069A000000001");
    assert_eq!(
        doc.download_url,
        "/sfc/servlet.shepherd/document/download/069A000000001"
    );
    assert!(form.is_submit_enabled());
    assert_eq!(log.latest().unwrap().message, "File uploaded successfully.");
}

#[test]
fn empty_upload_is_ignored() {
    let mut log = NotificationLog::default();
    let mut form = CertificationForm::new(today());

    form.upload_finished(&[], &mut log);

    assert!(form.upload().is_none());
    assert!(log.is_empty());
}

// ===== Submit =====

#[test]
fn submit_requires_both_checkboxes() {
    let mut log = NotificationLog::default();
    let mut form = ready_form(&mut log);
    form.set_e_signature(false);
    let before = form.clone();
    let mut service = Certifications::default();

    let result = form.submit(&mut service, &mut log);

    assert_eq!(result, Err(FormError::ConfirmationRequired));
    assert!(service.received.is_empty());
    assert_eq!(form, before);
    let notice = log.latest().unwrap();
    assert_eq!(notice.variant, NotificationVariant::Error);
    assert_eq!(
        notice.message,
        "Please check confirmation and e-signature boxes."
    );
}

#[test]
fn submit_requires_upload() {
    let mut log = NotificationLog::default();
    let mut form = CertificationForm::new(today());
    form.set_confirmation(true);
    form.set_e_signature(true);

    let result = form.submit(&mut Certifications::default(), &mut log);

    assert_eq!(result, Err(FormError::UploadRequired));
    assert_eq!(
        log.latest().unwrap().message,
        "Please upload a PDF before submitting."
    );
}

#[test]
fn successful_submit_moves_to_submitted_phase() {
    let mut log = NotificationLog::default();
    let mut form = ready_form(&mut log);
    let mut service = Certifications::default();

    let record_id = form.submit(&mut service, &mut log).unwrap();

    assert_eq!(record_id.as_str(), "a0X000000000001");
    assert_eq!(form.record_id(), Some(&record_id));
    match form.phase() {
        FormPhase::Submitted(summary) => {
            assert_eq!(summary.user_name, "Ada Lovelace");
            assert_eq!(summary.comments, "All good");
            assert_eq!(summary.certification_date, today());
        }
        FormPhase::Editing => panic!("Expected Submitted phase"),
    }
    assert_eq!(
        log.latest().unwrap().message,
        "Certification submitted successfully."
    );
}

#[test]
fn submit_sends_full_payload() {
    let mut log = NotificationLog::default();
    let mut form = ready_form(&mut log);
    let mut service = Certifications::default();

    form.submit(&mut service, &mut log).unwrap();

    let payload = &service.received[0];
    assert_eq!(payload.certification_period, "6 month");
    assert_eq!(payload.certification_date, "2024-06-01");
    assert_eq!(payload.country, "United Kingdom");
    assert_eq!(payload.comments, "All good");
    assert!(payload.confirmation && payload.e_signature);
    assert_eq!(
        payload.content_document_id.as_ref().map(DocumentId::as_str),
        Some("069A000000001")
    );
}

#[test]
fn service_failure_keeps_form_for_retry() {
    let mut log = NotificationLog::default();
    let mut form = ready_form(&mut log);
    let before = form.clone();
    let mut service = Certifications {
        fail: true,
        ..Certifications::default()
    };

    let result = form.submit(&mut service, &mut log);

    assert!(matches!(result, Err(FormError::Service(_))));
    assert_eq!(form, before);
    assert_eq!(
        log.latest().unwrap().message,
        "Error submitting certification."
    );

    service.fail = false;
    assert!(form.submit(&mut service, &mut log).is_ok());
}

#[test]
fn second_submit_is_rejected() {
    let mut log = NotificationLog::default();
    let mut form = ready_form(&mut log);
    let mut service = Certifications::default();
    form.submit(&mut service, &mut log).unwrap();

    let result = form.submit(&mut service, &mut log);

    assert_eq!(result, Err(FormError::AlreadySubmitted));
    assert_eq!(service.received.len(), 1);
}

// ===== Back =====

#[test]
fn back_resets_inputs_but_keeps_profile() {
    let mut log = NotificationLog::default();
    let mut form = ready_form(&mut log);
    form.submit(&mut Certifications::default(), &mut log).unwrap();

    form.back();

    assert_eq!(form.phase(), &FormPhase::Editing);
    assert_eq!(form.comments(), "");
    assert!(!form.confirmation());
    assert!(!form.e_signature());
    assert!(form.upload().is_none());
    assert!(form.record_id().is_none());
    assert_eq!(form.user_name(), "Ada Lovelace");
    assert_eq!(form.price(), "120.00");
}
