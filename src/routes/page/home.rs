use crate::blog::PostForm;
use crate::state::SharedState;
use crate::templates::IndexTemplate;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Response};
use axum::Form;

pub(super) async fn get(State(state): SharedState) -> Result<Html<String>, StatusCode> {
    let posts = state.list_posts().await;
    super::render(IndexTemplate { posts })
}

pub(super) async fn post(State(state): SharedState, Form(form): Form<PostForm>) -> Response {
    state.create_post(form).await;
    super::redirect_home()
}
