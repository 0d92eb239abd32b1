use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::model::file::SelectedFile;
use crate::model::form::{Field, SchoolForm};
use crate::validation::{validate, FieldErrors};

use super::payload::{CreateSchoolRequest, MultipartPayload};

pub const SUCCESS_MESSAGE: &str = "School added successfully!";
pub const ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Where the add-school form is in its submit cycle.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    /// Banner text for the finished states.
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::Success(message) | SubmissionStatus::Error(message) => {
                Some(message.as_str())
            }
            SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
        }
    }
}

/// State container for the add-school page.
///
/// Only `submit` and `complete` move the status; field edits never do. At most one request is
/// in flight: `submit` refuses to hand out a second one until `complete` has been called.
#[derive(Clone, Debug)]
pub struct SubmissionFlow<F> {
    config: ApiConfig,
    form: SchoolForm<F>,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl<F> SubmissionFlow<F>
where
    F: SelectedFile + Clone,
{
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config,
            form: SchoolForm::default(),
            errors: FieldErrors::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn form(&self) -> &SchoolForm<F> {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn set_field(&mut self, field: Field, value: String) {
        self.form.set_text(field, value);
    }

    pub fn set_image(&mut self, files: Vec<F>) {
        self.form.image = files;
    }

    /// Validates the draft and, if it passes, returns the one request the caller must send.
    ///
    /// Returns `None` while a request is already in flight, or when validation fails; in the
    /// latter case the field errors are stored and the status is left as it was.
    pub fn submit(&mut self) -> Option<CreateSchoolRequest<F>> {
        if self.is_submitting() {
            return None;
        }

        match validate(&self.form) {
            Ok(input) => {
                self.errors.clear();
                self.status = SubmissionStatus::Submitting;
                Some(CreateSchoolRequest {
                    url: self.config.create_url(),
                    payload: MultipartPayload::from_input(input),
                })
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Applies the outcome of the in-flight request.
    ///
    /// A completion that arrives while nothing is in flight is dropped. On failure the error is
    /// handed back for logging; the user only ever sees `ERROR_MESSAGE`.
    pub fn complete(&mut self, outcome: Result<(), ApiError>) -> Option<ApiError> {
        if !self.is_submitting() {
            return None;
        }

        match outcome {
            Ok(()) => {
                self.form = SchoolForm::default();
                self.errors.clear();
                self.status = SubmissionStatus::Success(SUCCESS_MESSAGE.to_string());
                None
            }
            Err(error) => {
                self.status = SubmissionStatus::Error(ERROR_MESSAGE.to_string());
                Some(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Clone, Debug, PartialEq)]
    struct Photo(u64);

    impl SelectedFile for Photo {
        fn name(&self) -> String {
            "photo.jpg".into()
        }

        fn size(&self) -> u64 {
            self.0
        }

        fn mime_type(&self) -> String {
            "image/jpeg".into()
        }
    }

    fn filled_flow() -> SubmissionFlow<Photo> {
        let mut flow = SubmissionFlow::new(ApiConfig::new("http://backend.test"));
        flow.set_field(Field::Name, "Sunrise Academy".into());
        flow.set_field(Field::Address, "221 Ring Road".into());
        flow.set_field(Field::City, "Delhi".into());
        flow.set_field(Field::State, "DL".into());
        flow.set_field(Field::Contact, "9000012345".into());
        flow.set_field(Field::EmailId, "desk@sunrise.org".into());
        flow.set_image(vec![Photo(2048)]);
        flow
    }

    #[test]
    fn invalid_form_produces_no_request() {
        let mut flow: SubmissionFlow<Photo> = SubmissionFlow::new(ApiConfig::default());

        assert_eq!(flow.submit(), None);
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
        assert_eq!(
            flow.errors().first_message(Field::Image),
            Some("School image is required.")
        );
    }

    #[test]
    fn second_submit_is_refused_while_in_flight() {
        let mut flow = filled_flow();

        let request = flow.submit().unwrap();
        assert_eq!(request.url, "http://backend.test/create");
        assert!(flow.is_submitting());
        assert_eq!(flow.submit(), None);
    }

    #[test]
    fn late_completion_is_ignored() {
        let mut flow = filled_flow();

        assert_eq!(flow.complete(Ok(())), None);
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
        assert_eq!(flow.form().name, "Sunrise Academy");
    }

    #[test]
    fn fixing_errors_clears_them_on_next_submit() {
        let mut flow = filled_flow();
        flow.set_field(Field::City, "D".into());
        assert_eq!(flow.submit(), None);
        assert_eq!(flow.errors().len(), 1);

        flow.set_field(Field::City, "Delhi".into());
        assert!(flow.submit().is_some());
        assert!(flow.errors().is_empty());
    }

    #[test]
    fn resubmit_allowed_after_error() {
        let mut flow = filled_flow();
        flow.submit().unwrap();
        let error = flow.complete(Err(ApiError::Transport("offline".into())));

        assert_eq!(error, Some(ApiError::Transport("offline".into())));
        assert_eq!(flow.status().message(), Some(ERROR_MESSAGE));
        assert!(flow.submit().is_some());
    }
}
