use common::config::ApiConfig;
use common::error::ApiError;
use common::model::file::SelectedFile;
use common::model::form::Field;
use common::submission::{
    CreateSchoolRequest, PartValue, SubmissionFlow, SubmissionStatus, ERROR_MESSAGE,
    SUCCESS_MESSAGE,
};
use pretty_assertions::assert_eq;

#[derive(Clone, Debug, PartialEq)]
struct Upload {
    name: &'static str,
    size: u64,
    mime: &'static str,
}

impl SelectedFile for Upload {
    fn name(&self) -> String {
        self.name.to_string()
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> String {
        self.mime.to_string()
    }
}

/// Stand-in for the backend: records every request and answers with a fixed status.
struct FakeBackend {
    status: u16,
    received: Vec<CreateSchoolRequest<Upload>>,
}

impl FakeBackend {
    fn answering(status: u16) -> Self {
        Self {
            status,
            received: Vec::new(),
        }
    }

    fn post(&mut self, request: CreateSchoolRequest<Upload>) -> Result<(), ApiError> {
        self.received.push(request);
        ApiError::check_status(self.status)
    }
}

fn logo() -> Upload {
    Upload {
        name: "logo.png",
        size: 48_000,
        mime: "image/png",
    }
}

fn filled_flow() -> SubmissionFlow<Upload> {
    let mut flow = SubmissionFlow::new(ApiConfig::new("http://localhost:5000"));
    flow.set_field(Field::Name, "Alpha Public School".into());
    flow.set_field(Field::Address, "14 MG Road".into());
    flow.set_field(Field::City, "Pune".into());
    flow.set_field(Field::State, "Maharashtra".into());
    flow.set_field(Field::Contact, "9876543210".into());
    flow.set_field(Field::EmailId, "info@alpha.edu.in".into());
    flow.set_image(vec![logo()]);
    flow
}

/// Mirrors what the add page does on submit: one POST per request handed out.
fn submit_against(flow: &mut SubmissionFlow<Upload>, backend: &mut FakeBackend) {
    if let Some(request) = flow.submit() {
        let outcome = backend.post(request);
        flow.complete(outcome);
    }
}

#[test]
fn valid_form_posts_six_text_fields_and_one_file() {
    let mut flow = filled_flow();
    let mut backend = FakeBackend::answering(200);

    submit_against(&mut flow, &mut backend);

    assert_eq!(backend.received.len(), 1);
    let request = &backend.received[0];
    assert_eq!(request.url, "http://localhost:5000/create");
    assert_eq!(
        request.payload.text_fields(),
        vec![
            ("name", "Alpha Public School"),
            ("address", "14 MG Road"),
            ("city", "Pune"),
            ("state", "Maharashtra"),
            ("contact", "9876543210"),
            ("email_id", "info@alpha.edu.in"),
        ]
    );
    assert_eq!(request.payload.file_fields(), vec![("image", &logo())]);
    assert_eq!(request.payload.parts()[0].value, PartValue::File(logo()));
}

#[test]
fn success_clears_the_form() {
    let mut flow = filled_flow();
    let mut backend = FakeBackend::answering(200);

    submit_against(&mut flow, &mut backend);

    assert_eq!(
        flow.status(),
        &SubmissionStatus::Success(SUCCESS_MESSAGE.to_string())
    );
    for field in Field::TEXT {
        assert_eq!(flow.form().text(field), "", "{field} should be cleared");
    }
    assert!(flow.form().image.is_empty());
}

#[test]
fn server_error_keeps_the_form() {
    let mut flow = filled_flow();
    let mut backend = FakeBackend::answering(500);

    submit_against(&mut flow, &mut backend);

    assert_eq!(backend.received.len(), 1);
    assert_eq!(
        flow.status(),
        &SubmissionStatus::Error(ERROR_MESSAGE.to_string())
    );
    assert_eq!(flow.form().name, "Alpha Public School");
    assert_eq!(flow.form().image, vec![logo()]);
}

#[test]
fn invalid_form_never_reaches_the_network() {
    let mut flow = filled_flow();
    flow.set_field(Field::Contact, "987-654-3210".into());
    flow.set_image(vec![Upload {
        name: "logo.gif",
        size: 50_000,
        mime: "image/gif",
    }]);
    let mut backend = FakeBackend::answering(200);

    submit_against(&mut flow, &mut backend);

    assert!(backend.received.is_empty());
    assert_eq!(flow.status(), &SubmissionStatus::Idle);
    assert_eq!(
        flow.errors().first_message(Field::Contact),
        Some("Contact must be a 10-digit number")
    );
    assert_eq!(
        flow.errors().first_message(Field::Image),
        Some("Only .jpeg ,.jpg and .png formats are supported.")
    );
}
