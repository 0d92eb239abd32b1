use common::config::ApiConfig;
use yew::prelude::*;

use crate::app::Page;

#[derive(Properties, PartialEq, Clone)]
pub struct ShowSchoolsProps {
    /// Backend to list schools from; also used to build image URLs.
    pub config: ApiConfig,

    /// Asks the app to switch pages; "+ Add School" sends `Page::AddSchool`.
    pub on_navigate: Callback<Page>,
}
