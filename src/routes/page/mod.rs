use crate::state::NestedRouter;
use askama::Template;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;

mod delete;
mod edit;
mod home;
mod new;


pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/", get(home::get).post(home::post))
        .route("/new", get(new::get))
        .route("/edit/:id", get(edit::get).post(edit::post))
        .route("/delete/:id", get(delete::get))
}

// The original contract is a literal 302; axum's Redirect helpers only emit
// 303/307/308.
pub(super) fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/")]).into_response()
}

pub(super) fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Post not found").into_response()
}

pub(super) fn render<T: Template>(template: T) -> Result<Html<String>, StatusCode> {
    match template.render() {
        Ok(html) => Ok(Html(html)),
        Err(err) => {
            eprintln!("Error rendering page: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
