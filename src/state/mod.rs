use crate::blog::Post;
use std::sync::Arc;
use tokio::sync::RwLock;

pub mod posts;

pub type SharedState = axum::extract::State<Arc<State>>;
pub type NestedRouter = axum::Router<Arc<State>>;

/// Process-lifetime application state. The post collection lives here and
/// nowhere else; handlers receive it through axum state so tests can build
/// isolated instances.
#[derive(Debug)]
pub struct State {
    pub posts: RwLock<Vec<Post>>,
}

impl State {
    pub fn new() -> State {
        State {
            posts: RwLock::new(Vec::new()),
        }
    }
}
