//! View for the show-schools page.
//!
//! Layout, top to bottom: header with the "+ Add School" action, search box with page-size
//! selector, then either the loading text, the error text, or the card grid followed by the
//! pagination controls. Everything below the search bar is derived from `Listing::view`.

use common::config::ApiConfig;
use common::listing::{PageSize, PageView};
use common::model::school::SchoolRecord;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ShowSchoolsComponent;

pub fn view(component: &ShowSchoolsComponent, ctx: &Context<ShowSchoolsComponent>) -> Html {
    let link = ctx.link();

    html! {
        <main class="page show-schools">
            <div class="page-header">
                <h1>{ "Registered Schools" }</h1>
                <button class="btn" onclick={link.callback(|_| Msg::AddSchool)}>
                    { "+ Add School" }
                </button>
            </div>

            { build_search_bar(component, link) }
            { build_content(component, link, &ctx.props().config) }
        </main>
    }
}

fn build_search_bar(component: &ShowSchoolsComponent, link: &Scope<ShowSchoolsComponent>) -> Html {
    let current = component.listing.pagination().size();
    html! {
        <div class="search-bar">
            <input
                type="text"
                class="search-input"
                value={component.listing.query().to_string()}
                placeholder="Search by name, city, state, email, or contact..."
                oninput={link.callback(|e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::UpdateQuery(input.value())
                })}
            />
            <select
                class="page-size"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    let size = select
                        .value()
                        .parse::<usize>()
                        .ok()
                        .and_then(PageSize::from_value)
                        .unwrap_or_default();
                    Msg::SetPageSize(size)
                })}
            >
                { for PageSize::ALL.into_iter().map(|size| html! {
                    <option value={size.get().to_string()} selected={size == current}>
                        { format!("{} per page", size.get()) }
                    </option>
                }) }
            </select>
        </div>
    }
}

fn build_content(
    component: &ShowSchoolsComponent,
    link: &Scope<ShowSchoolsComponent>,
    config: &ApiConfig,
) -> Html {
    if let Some(reason) = component.listing.error() {
        return html! { <p class="page-error">{ format!("Error: {}", reason) }</p> };
    }

    match component.listing.view() {
        None => html! { <p class="page-loading">{ "Loading schools..." }</p> },
        Some(page) => html! {
            <>
                <div class="school-grid">
                    {
                        if page.records.is_empty() {
                            html! {
                                <p class="empty">{ "No schools found matching your search." }</p>
                            }
                        } else {
                            page.records
                                .iter()
                                .map(|record| school_card(record, config))
                                .collect::<Html>()
                        }
                    }
                </div>
                { build_pagination(&page, link) }
            </>
        },
    }
}

fn school_card(record: &SchoolRecord, config: &ApiConfig) -> Html {
    html! {
        <div class="school-card" key={record.id.to_string()}>
            <div class="school-card-top">
                <div class="school-card-image">
                    <img src={record.image_url(config)} alt={format!("Image of {}", record.name)} />
                </div>
                <h2 class="school-card-name">{ record.name.clone() }</h2>
            </div>
            <div class="school-card-body">
                <div class="school-card-tags">
                    <span>{ "City: " }<strong>{ record.city.clone() }</strong></span>
                    <span>{ "State: " }<strong>{ record.state.clone() }</strong></span>
                </div>
                <div class="school-card-details">
                    <div><strong>{ "Location: " }</strong>{ record.address.clone() }</div>
                    <div class="truncate">
                        <strong>{ "Email: " }</strong>{ record.email_id.clone() }
                    </div>
                    <div><strong>{ "Phone: " }</strong>{ record.contact.clone() }</div>
                </div>
            </div>
        </div>
    }
}

/// Previous/Next controls with a "Page X of Y" indicator, shown only past one page.
fn build_pagination(page: &PageView<'_>, link: &Scope<ShowSchoolsComponent>) -> Html {
    if !page.has_multiple_pages() {
        return html! {};
    }

    html! {
        <div class="pagination">
            <button
                class="btn-page"
                disabled={!page.can_go_previous()}
                onclick={link.callback(|_| Msg::PreviousPage)}
            >
                { "Previous" }
            </button>
            <span>{ format!("Page {} of {}", page.page, page.total_pages) }</span>
            <button
                class="btn-page"
                disabled={!page.can_go_next()}
                onclick={link.callback(|_| Msg::NextPage)}
            >
                { "Next" }
            </button>
        </div>
    }
}
