//! Add-school page: the registration form.
//!
//! The page owns a `SubmissionFlow` and renders it. Submitting validates the draft locally; only
//! a valid form produces a request, which is posted from a spawned task whose result comes back
//! as `Msg::SubmitFinished`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AddSchoolProps;
pub use state::AddSchoolComponent;

impl Component for AddSchoolComponent {
    type Message = Msg;
    type Properties = AddSchoolProps;

    fn create(ctx: &Context<Self>) -> Self {
        AddSchoolComponent::new(ctx.props().config.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
