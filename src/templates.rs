use crate::blog::Post;
use askama::Template;

// Stored content is escaped by askama when rendered, so a post body
// containing markup comes out inert.

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub posts: Vec<Post>,
}

#[derive(Template)]
#[template(path = "new.html")]
pub struct NewTemplate;

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub post: Post,
}
