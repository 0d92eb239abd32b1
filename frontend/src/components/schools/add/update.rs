//! Update function for the add-school page.
//!
//! Every state change goes through `SubmissionFlow`; this module only adds the side effects:
//! spawning the POST, logging failures to the console and resetting the file input.

use common::submission::SubmissionStatus;
use yew::prelude::*;

use crate::api;
use crate::app::Page;

use super::messages::Msg;
use super::state::AddSchoolComponent;

pub fn update(
    component: &mut AddSchoolComponent,
    ctx: &Context<AddSchoolComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateField(field, value) => {
            component.flow.set_field(field, value);
            true
        }
        Msg::ImageSelected(files) => {
            component.flow.set_image(files);
            true
        }
        Msg::Submit => {
            if let Some(request) = component.flow.submit() {
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let outcome = api::create_school(request).await;
                    link.send_message(Msg::SubmitFinished(outcome));
                });
            }
            true
        }
        Msg::SubmitFinished(outcome) => {
            if let Some(error) = component.flow.complete(outcome) {
                gloo_console::error!(format!("Submission error: {}", error));
            }
            if matches!(component.flow.status(), SubmissionStatus::Success(_)) {
                component.clear_image_input();
            }
            true
        }
        Msg::Back => {
            ctx.props().on_navigate.emit(Page::ShowSchools);
            false
        }
    }
}
