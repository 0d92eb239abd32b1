use common::config::ApiConfig;
use common::submission::SubmissionFlow;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::schools::file::PickedFile;

/// State of the add-school page.
pub struct AddSchoolComponent {
    /// Form draft, field errors and submit status.
    pub flow: SubmissionFlow<PickedFile>,

    /// The `<input type="file">`. File inputs cannot be driven through `value`, so a successful
    /// submit clears it through this reference.
    pub image_input_ref: NodeRef,
}

impl AddSchoolComponent {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            flow: SubmissionFlow::new(config),
            image_input_ref: NodeRef::default(),
        }
    }

    pub fn clear_image_input(&self) {
        if let Some(input) = self.image_input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}
