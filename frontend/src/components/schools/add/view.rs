//! View for the add-school page: a two-column form with inline field errors, the image picker,
//! Back/Submit buttons and the status banner.

use common::model::form::Field;
use common::submission::SubmissionStatus;
use common::validation::ACCEPTED_IMAGE_TYPES;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::schools::file::picked_files;

use super::messages::Msg;
use super::state::AddSchoolComponent;

pub fn view(component: &AddSchoolComponent, ctx: &Context<AddSchoolComponent>) -> Html {
    let link = ctx.link();
    let submitting = component.flow.is_submitting();

    html! {
        <main class="page add-school">
            <div class="card">
                <h1>{ "Add New School" }</h1>

                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    <div class="form-grid">
                        { text_input(component, link, Field::Name, "text", false) }
                        { text_input(component, link, Field::Contact, "tel", false) }
                        { text_input(component, link, Field::Address, "text", true) }
                        { text_input(component, link, Field::City, "text", false) }
                        { text_input(component, link, Field::State, "text", false) }
                        { text_input(component, link, Field::EmailId, "email", true) }
                        { image_input(component, link) }
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn" onclick={link.callback(|_| Msg::Back)}>
                            { "Back" }
                        </button>
                        <button type="submit" class="btn" disabled={submitting}>
                            { if submitting { "Submitting..." } else { "Add School" } }
                        </button>
                    </div>
                </form>

                { status_banner(component.flow.status()) }
            </div>
        </main>
    }
}

/// Labelled text input bound to one form field.
fn text_input(
    component: &AddSchoolComponent,
    link: &Scope<AddSchoolComponent>,
    field: Field,
    kind: &'static str,
    wide: bool,
) -> Html {
    let value = component.flow.form().text(field).to_string();
    html! {
        <div class={classes!("form-field", wide.then_some("wide"))}>
            <label for={field.key()}>{ field.label() }</label>
            <input
                type={kind}
                id={field.key()}
                name={field.key()}
                value={value}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::UpdateField(field, input.value())
                })}
            />
            { field_error(component, field) }
        </div>
    }
}

fn image_input(component: &AddSchoolComponent, link: &Scope<AddSchoolComponent>) -> Html {
    html! {
        <div class="form-field wide">
            <label for={Field::Image.key()}>{ Field::Image.label() }</label>
            <input
                type="file"
                id={Field::Image.key()}
                name={Field::Image.key()}
                accept={ACCEPTED_IMAGE_TYPES.join(", ")}
                ref={component.image_input_ref.clone()}
                onchange={link.callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::ImageSelected(picked_files(&input))
                })}
            />
            { field_error(component, Field::Image) }
        </div>
    }
}

/// First error message for `field`, or nothing.
fn field_error(component: &AddSchoolComponent, field: Field) -> Html {
    match component.flow.errors().first_message(field) {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}

fn status_banner(status: &SubmissionStatus) -> Html {
    let class = match status {
        SubmissionStatus::Success(_) => "status status-success",
        SubmissionStatus::Error(_) => "status status-error",
        SubmissionStatus::Idle | SubmissionStatus::Submitting => return html! {},
    };
    html! {
        <div class={class}>{ status.message().unwrap_or_default().to_string() }</div>
    }
}
