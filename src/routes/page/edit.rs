use crate::blog::{PostForm, PostID};
use crate::state::SharedState;
use crate::templates::EditTemplate;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Form;

pub(super) async fn get(State(state): SharedState, Path(post_id): Path<PostID>) -> Response {
    let Some(post) = state.find_post(&post_id).await else {
        return super::not_found();
    };

    super::render(EditTemplate { post }).into_response()
}

pub(super) async fn post(
    State(state): SharedState,
    Path(post_id): Path<PostID>,
    Form(form): Form<PostForm>,
) -> Response {
    if !state.update_post(&post_id, form).await {
        return super::not_found();
    }

    super::redirect_home()
}
