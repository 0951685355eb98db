//! Wire-level tests: the real reqwest client against a scripted tiny_http backend.

use std::io::Read;
use std::thread::JoinHandle;
use std::time::Duration;

use artzybear_commissions::form::{CommissionField, ContactField};
use artzybear_commissions::model::{ReferenceImage, ReferenceImageSet};
use artzybear_commissions::workflow::probe_health;
use artzybear_commissions::{
    ApiError, CommissionForm, ContactForm, HttpStudioApi, SiteConfig, SubmissionStatus, SubmitError,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

#[derive(Debug)]
struct Recorded {
    method: String,
    url: String,
    content_type: String,
    body: Vec<u8>,
}

impl Recorded {
    fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }

    fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

fn spawn_backend(script: Vec<(u16, Value)>) -> (String, JoinHandle<Vec<Recorded>>) {
    spawn_raw_backend(
        script
            .into_iter()
            .map(|(status, payload)| (status, payload.to_string()))
            .collect(),
    )
}

/// Serve `script` in order, then keep listening briefly so an unexpected
/// extra request still shows up in the recording.
fn spawn_raw_backend(script: Vec<(u16, String)>) -> (String, JoinHandle<Vec<Recorded>>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind test backend");
    let base = format!("http://{}", server.server_addr());

    let handle = std::thread::spawn(move || {
        let mut recorded = Vec::new();
        let mut script = script.into_iter();
        loop {
            let wait = Duration::from_millis(if script.len() > 0 { 5_000 } else { 300 });
            let mut request = match server.recv_timeout(wait) {
                Ok(Some(request)) => request,
                _ => break,
            };

            let mut body = Vec::new();
            request.as_reader().read_to_end(&mut body).expect("read body");
            let content_type = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Content-Type"))
                .map(|h| h.value.as_str().to_string())
                .unwrap_or_default();
            recorded.push(Recorded {
                method: request.method().to_string(),
                url: request.url().to_string(),
                content_type,
                body,
            });

            let (status, payload) = script
                .next()
                .unwrap_or((500, json!({"detail": "unexpected request"}).to_string()));
            let header =
                tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .expect("static header");
            let response = tiny_http::Response::from_string(payload)
                .with_status_code(status)
                .with_header(header);
            let _ = request.respond(response);
        }
        recorded
    });

    (base, handle)
}

fn api_for(base: &str) -> HttpStudioApi {
    HttpStudioApi::new(SiteConfig::new(base))
}

fn filled_commission_form() -> CommissionForm {
    let mut form = CommissionForm::new();
    for (field, value) in [
        (CommissionField::ClientName, "Meera Iyer"),
        (CommissionField::ClientEmail, "meera@example.com"),
        (CommissionField::ClientPhone, "+91 90000 12345"),
        (CommissionField::CommissionType, "traditional"),
        (CommissionField::SubjectDescription, "Bharatanatyam dancer mid-pose"),
        (CommissionField::SizePreference, "medium"),
        (CommissionField::BudgetRange, "8000-15000"),
        (CommissionField::Deadline, "2026-12-01"),
    ] {
        form.set_field(field, value.to_string());
    }
    form
}

fn two_images() -> ReferenceImageSet {
    ReferenceImageSet::new(vec![
        ReferenceImage::new("front.jpg", "image/jpeg", b"jpeg-bytes".to_vec()),
        ReferenceImage::new("side.png", "image/png", b"png-bytes".to_vec()),
    ])
}

fn created(id: &str) -> Value {
    json!({
        "id": id,
        "client_name": "Meera Iyer",
        "client_email": "meera@example.com",
        "status": "pending",
        "reference_images": [],
        "price_quoted": null,
        "created_at": "2026-10-17T09:00:00",
        "updated_at": "2026-10-17T09:00:00"
    })
}

#[tokio::test]
async fn commission_without_images_is_one_json_post() {
    let (base, backend) = spawn_backend(vec![(200, created("abc123"))]);
    let api = api_for(&base);
    let mut form = filled_commission_form();

    let outcome = form.begin_submit().expect("idle").run(&api).await;
    form.finish(&outcome);
    let recorded = backend.join().expect("backend thread");

    assert!(outcome.is_ok());
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert!(form.draft().is_empty());

    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].method, "POST");
    assert_eq!(recorded[0].url, "/api/commissions");
    assert!(recorded[0].content_type.starts_with("application/json"));
    assert_eq!(
        recorded[0].json(),
        json!({
            "client_name": "Meera Iyer",
            "client_email": "meera@example.com",
            "client_phone": "+91 90000 12345",
            "commission_type": "traditional",
            "subject_description": "Bharatanatyam dancer mid-pose",
            "size_preference": "medium",
            "budget_range": "8000-15000",
            "deadline": "2026-12-01"
        })
    );
}

#[tokio::test]
async fn images_are_uploaded_under_created_id() {
    let (base, backend) = spawn_backend(vec![
        (200, created("abc123")),
        (200, json!({"message": "Uploaded 2 reference images successfully"})),
    ]);
    let api = api_for(&base);
    let mut form = filled_commission_form();
    form.set_images(two_images());

    let outcome = form.begin_submit().expect("idle").run(&api).await;
    form.finish(&outcome);
    let recorded = backend.join().expect("backend thread");

    let outcome = outcome.expect("chain succeeds");
    assert_eq!(
        outcome.upload.map(|r| r.message).as_deref(),
        Some("Uploaded 2 reference images successfully")
    );
    assert!(form.images().is_empty());

    assert_eq!(recorded.len(), 2);
    let upload = &recorded[1];
    assert_eq!(upload.method, "POST");
    assert_eq!(upload.url, "/api/commissions/abc123/upload-images");
    assert!(upload.content_type.starts_with("multipart/form-data"));

    let body = upload.body_text();
    assert_eq!(body.matches("name=\"files\"").count(), 2);
    assert!(body.contains("filename=\"front.jpg\""));
    assert!(body.contains("filename=\"side.png\""));
    assert!(body.contains("jpeg-bytes"));
    assert!(body.find("front.jpg") < body.find("side.png"));
}

#[tokio::test]
async fn rejected_create_skips_upload_and_keeps_input() {
    let (base, backend) = spawn_backend(vec![(500, json!({"detail": "database unavailable"}))]);
    let api = api_for(&base);
    let mut form = filled_commission_form();
    form.set_images(two_images());
    let before = form.draft().clone();

    let outcome = form.begin_submit().expect("idle").run(&api).await;
    form.finish(&outcome);
    let recorded = backend.join().expect("backend thread");

    match outcome {
        Err(SubmitError::Create(ApiError::Rejected { status, detail, .. })) => {
            assert_eq!(status, 500);
            assert_eq!(detail, "database unavailable");
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(recorded.len(), 1, "no upload after a failed create");
    assert_eq!(form.status(), SubmissionStatus::Error);
    assert_eq!(form.draft(), &before);
    assert_eq!(form.images(), &two_images());
}

#[tokio::test]
async fn failed_upload_is_reported_as_error() {
    let (base, backend) = spawn_backend(vec![
        (200, created("abc123")),
        (404, json!({"detail": "Commission request not found"})),
    ]);
    let api = api_for(&base);
    let mut form = filled_commission_form();
    form.set_images(two_images());

    let outcome = form.begin_submit().expect("idle").run(&api).await;
    form.finish(&outcome);
    backend.join().expect("backend thread");

    assert!(matches!(outcome, Err(SubmitError::Upload { ref commission_id, .. }) if commission_id == "abc123"));
    assert_eq!(form.status(), SubmissionStatus::Error);
    assert!(!form.draft().is_empty());
}

#[tokio::test]
async fn upload_with_empty_no_content_reply_succeeds() {
    let (base, backend) = spawn_raw_backend(vec![
        (200, created("abc123").to_string()),
        (204, String::new()),
    ]);
    let api = api_for(&base);
    let mut form = filled_commission_form();
    form.set_images(two_images());

    let outcome = form.begin_submit().expect("idle").run(&api).await;
    form.finish(&outcome);
    let recorded = backend.join().expect("backend thread");

    let outcome = outcome.expect("any 2xx upload is success");
    assert_eq!(outcome.upload.map(|r| r.message).as_deref(), Some(""));
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert!(form.images().is_empty());
    assert_eq!(recorded.len(), 2);
}

#[tokio::test]
async fn upload_with_unexpected_body_succeeds() {
    let (base, backend) = spawn_raw_backend(vec![
        (200, created("abc123").to_string()),
        (200, "uploaded".to_string()),
    ]);
    let api = api_for(&base);
    let mut form = filled_commission_form();
    form.set_images(two_images());

    let outcome = form.begin_submit().expect("idle").run(&api).await;
    form.finish(&outcome);
    backend.join().expect("backend thread");

    assert!(outcome.is_ok(), "unexpected outcome: {outcome:?}");
    assert_eq!(form.status(), SubmissionStatus::Success);
}

#[tokio::test]
async fn create_with_unreadable_body_is_malformed() {
    let (base, backend) = spawn_raw_backend(vec![(200, "<html>ok</html>".to_string())]);
    let api = api_for(&base);
    let mut form = filled_commission_form();
    form.set_images(two_images());

    let outcome = form.begin_submit().expect("idle").run(&api).await;
    form.finish(&outcome);
    let recorded = backend.join().expect("backend thread");

    assert!(matches!(outcome, Err(SubmitError::Create(ApiError::Malformed { .. }))));
    assert_eq!(recorded.len(), 1, "no upload without a record id");
    assert_eq!(form.status(), SubmissionStatus::Error);
}

fn filled_contact_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.set_field(ContactField::Name, "Ravi".into());
    form.set_field(ContactField::Email, "ravi@example.com".into());
    form.set_field(ContactField::Subject, "Turnaround".into());
    form.set_field(ContactField::Message, "How long for A3?".into());
    form
}

#[tokio::test]
async fn contact_accepted_without_id_is_success() {
    let (base, backend) = spawn_backend(vec![(200, json!({"status": "received"}))]);
    let api = api_for(&base);
    let mut form = filled_contact_form();

    let outcome = form.begin_submit().expect("idle").run(&api).await;
    form.finish(&outcome);
    backend.join().expect("backend thread");

    assert_eq!(outcome.expect("any 2xx is success").id, "");
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert_eq!(form.field(ContactField::Name), "");
}

#[tokio::test]
async fn contact_accepted_with_empty_body_is_success() {
    let (base, backend) = spawn_raw_backend(vec![(201, String::new())]);
    let api = api_for(&base);
    let mut form = filled_contact_form();

    let outcome = form.begin_submit().expect("idle").run(&api).await;
    form.finish(&outcome);
    backend.join().expect("backend thread");

    assert!(outcome.is_ok(), "unexpected outcome: {outcome:?}");
    assert_eq!(form.status(), SubmissionStatus::Success);
}

#[tokio::test]
async fn one_client_serves_both_forms() {
    let (base, backend) = spawn_backend(vec![
        (200, created("abc123")),
        (200, json!({"id": "m-1"})),
    ]);
    let api = api_for(&base);
    let shared = api.clone();

    let mut commission = filled_commission_form();
    let outcome = commission.begin_submit().expect("idle").run(&api).await;
    commission.finish(&outcome);
    let mut contact = filled_contact_form();
    let sent = contact.begin_submit().expect("idle").run(&shared).await;
    contact.finish(&sent);
    let recorded = backend.join().expect("backend thread");

    assert_eq!(commission.status(), SubmissionStatus::Success);
    assert_eq!(contact.status(), SubmissionStatus::Success);
    let urls: Vec<_> = recorded.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(urls, vec!["/api/commissions", "/api/contact"]);
}

#[tokio::test]
async fn contact_message_is_one_json_post() {
    let (base, backend) = spawn_backend(vec![(
        200,
        json!({"id": "m-42", "name": "Ravi", "created_at": "2026-10-17T09:00:00"}),
    )]);
    let api = api_for(&base);
    let mut form = filled_contact_form();

    let outcome = form.begin_submit().expect("idle").run(&api).await;
    form.finish(&outcome);
    let recorded = backend.join().expect("backend thread");

    assert_eq!(outcome.expect("sent").id, "m-42");
    assert_eq!(form.status(), SubmissionStatus::Success);
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].url, "/api/contact");
    assert_eq!(
        recorded[0].json(),
        json!({
            "name": "Ravi",
            "email": "ravi@example.com",
            "subject": "Turnaround",
            "message": "How long for A3?"
        })
    );
}

#[tokio::test]
async fn health_probe_reads_status() {
    let (base, backend) = spawn_backend(vec![(
        200,
        json!({"status": "healthy", "timestamp": "2026-10-17T09:00:00"}),
    )]);
    let api = api_for(&base);

    let health = probe_health(&api).await.expect("healthy backend");
    let recorded = backend.join().expect("backend thread");

    assert_eq!(health.status, "healthy");
    assert_eq!(recorded[0].method, "GET");
    assert_eq!(recorded[0].url, "/api/health");
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() -> anyhow::Result<()> {
    let server = tiny_http::Server::http("127.0.0.1:0").map_err(|e| anyhow::anyhow!(e))?;
    let base = format!("http://{}", server.server_addr());
    drop(server);

    let api = api_for(&base);
    let mut form = filled_commission_form();
    let outcome = form.begin_submit().expect("idle").run(&api).await;
    form.finish(&outcome);

    assert!(matches!(outcome, Err(SubmitError::Create(ApiError::Network { .. }))));
    assert_eq!(form.status(), SubmissionStatus::Error);
    assert!(probe_health(&api).await.is_none());
    Ok(())
}
