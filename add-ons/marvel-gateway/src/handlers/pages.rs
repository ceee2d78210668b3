//! HTML pages.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use marvel_core::{CharacterId, SortOptions};

use super::{load_character, load_characters};
use crate::views::{self, detail, layout, list, query::QueryParams, sort_controls::SortControls, Page};
use crate::AppState;

fn not_found_page(state: &AppState) -> Page {
    Page::ok(state.config.page_title("Page not found"), views::not_found()).with_status(StatusCode::NOT_FOUND)
}

/// GET /
pub async fn home(State(state): State<AppState>) -> Response {
    layout::respond(&state.config, Page::ok(state.config.page_title(""), views::home()))
}

/// GET /about
pub async fn about(State(state): State<AppState>) -> Response {
    layout::respond(&state.config, Page::ok(state.config.page_title("About"), views::about()))
}

/// GET /contact
pub async fn contact(State(state): State<AppState>) -> Response {
    layout::respond(&state.config, Page::ok(state.config.page_title("Contact"), views::contact()))
}

/// Fallback for unknown paths.
pub async fn not_found(State(state): State<AppState>) -> Response {
    layout::respond(&state.config, not_found_page(&state))
}

/// GET /characters?sort=&order=
pub async fn characters(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let query = QueryParams::new(pairs);
    let options = SortOptions::from_query(query.get("sort"), query.get("order"));
    let characters = load_characters(state.catalog.as_ref(), options);
    let body = format!(
        "<h2>Marvel Characters</h2>\n{controls}\n{list}\n<br>\n{count}",
        controls = SortControls::new("/characters", &query).render(),
        list = list::characters_list(&characters),
        count = list::number_of_characters(&characters),
    );
    layout::respond(&state.config, Page::ok(state.config.page_title("Characters"), body))
}

/// GET /characters/:id
pub async fn character_detail(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match load_character(state.catalog.as_ref(), &id) {
        Ok(character) => {
            let page = Page::ok(state.config.page_title(&character.label()), detail::character_page(&character));
            layout::respond(&state.config, page)
        }
        Err(e) => {
            tracing::info!(id = %id, error = %e, "Character page not found");
            layout::respond(&state.config, not_found_page(&state))
        }
    }
}

/// GET /compare?left=&right=
pub async fn compare(State(state): State<AppState>, Query(pairs): Query<Vec<(String, String)>>) -> Response {
    let query = QueryParams::new(pairs);
    let characters = state.catalog.list_characters(&SortOptions::default());
    let pick = |param: &str| {
        let id = CharacterId::from(query.get(param)?);
        characters.iter().find(|c| c.link_id().is_some() && c.matches(&id))
    };
    let (left, right) = (pick("left"), pick("right"));
    let body = detail::compare_page(&characters, &query, left, right);
    layout::respond(&state.config, Page::ok(state.config.page_title("Compare"), body))
}
