use crate::components::schools::add::AddSchoolComponent;
use crate::components::schools::show::ShowSchoolsComponent;
use common::config::ApiConfig;
use yew::{html, Component, Context, Html};

/// The two pages of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    AddSchool,
    ShowSchools,
}

pub enum Msg {
    Navigate(Page),
}

pub struct App {
    page: Page,
    config: ApiConfig,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = crate::config::api_config();
        gloo_console::log!(format!("Using backend at {}", config.base_url()));
        Self {
            page: Page::ShowSchools,
            config,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                let changed = self.page != page;
                self.page = page;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate = ctx.link().callback(Msg::Navigate);
        html! {
            <div>
                {
                    match self.page {
                        Page::AddSchool => html! {
                            <AddSchoolComponent config={self.config.clone()} {on_navigate} />
                        },
                        Page::ShowSchools => html! {
                            <ShowSchoolsComponent config={self.config.clone()} {on_navigate} />
                        },
                    }
                }
            </div>
        }
    }
}
