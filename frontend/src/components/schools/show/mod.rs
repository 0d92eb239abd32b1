//! Show-schools page: fetches the registered schools once and lets the user search and page
//! through them.
//!
//! The fetch is started on first render (guarded by `loaded`) and reports back with
//! `Msg::FetchSucceeded` or `Msg::FetchFailed`. Messages for a page that has already been torn
//! down are dropped by Yew, and `Listing` ignores results that arrive after it settled.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

use crate::api;
pub use messages::Msg;
pub use props::ShowSchoolsProps;
pub use state::ShowSchoolsComponent;

impl Component for ShowSchoolsComponent {
    type Message = Msg;
    type Properties = ShowSchoolsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ShowSchoolsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            let config = ctx.props().config.clone();
            spawn_local(async move {
                match api::fetch_schools(&config).await {
                    Ok(records) => link.send_message(Msg::FetchSucceeded(records)),
                    Err(err) => {
                        gloo_console::error!(format!("Failed to fetch schools: {}", err));
                        link.send_message(Msg::FetchFailed(err.to_string()));
                    }
                }
            });
        }
    }
}
