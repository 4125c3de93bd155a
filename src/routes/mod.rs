use crate::state::NestedRouter;

pub mod page;

pub fn route() -> NestedRouter {
    page::route()
}
