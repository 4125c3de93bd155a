use crate::blog::PostID;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::response::Response;

// Deleting an id that no longer exists still redirects; the handler does not
// distinguish "removed" from "was never there".
pub(super) async fn get(State(state): SharedState, Path(post_id): Path<PostID>) -> Response {
    state.delete_post(&post_id).await;
    super::redirect_home()
}
