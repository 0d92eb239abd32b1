//! Properties for the `AddSchoolComponent`.

use common::config::ApiConfig;
use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq, Clone)]
pub struct AddSchoolProps {
    /// Backend the form posts to.
    pub config: ApiConfig,

    /// Asks the app to switch pages; the Back button sends `Page::ShowSchools`.
    pub on_navigate: Callback<Page>,
}
