use yew::prelude::*;

use crate::app::Page;

use super::messages::Msg;
use super::state::ShowSchoolsComponent;

/// Applies `msg` to the listing. Every arm re-renders except navigation, which hands off to
/// the app.
pub fn update(
    component: &mut ShowSchoolsComponent,
    ctx: &Context<ShowSchoolsComponent>,
    msg: Msg,
) -> bool {
    let listing = &mut component.listing;
    match msg {
        Msg::FetchSucceeded(records) => listing.fetch_succeeded(records),
        Msg::FetchFailed(reason) => listing.fetch_failed(reason),
        Msg::UpdateQuery(query) => listing.set_query(query),
        Msg::SetPageSize(size) => listing.set_page_size(size),
        Msg::NextPage => listing.next_page(),
        Msg::PreviousPage => listing.previous_page(),
        Msg::AddSchool => {
            ctx.props().on_navigate.emit(Page::AddSchool);
            return false;
        }
    }
    true
}
