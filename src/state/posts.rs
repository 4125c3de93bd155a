use crate::blog::{Post, PostForm, PostID};

impl super::State {
    /// Every post, in insertion order.
    pub async fn list_posts(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    /// Appends a new post built from the submitted form and returns it.
    pub async fn create_post(&self, form: PostForm) -> Post {
        let post = Post::create(form);
        self.posts.write().await.push(post.clone());
        post
    }

    pub async fn find_post(&self, post_id: &PostID) -> Option<Post> {
        self.posts
            .read()
            .await
            .iter()
            .find(|post| post.id == *post_id)
            .cloned()
    }

    /// Overwrites title/author/content in place, leaving id and date as they
    /// were. Returns false when no post matches.
    pub async fn update_post(&self, post_id: &PostID, form: PostForm) -> bool {
        let mut posts = self.posts.write().await;
        let Some(post) = posts.iter_mut().find(|post| post.id == *post_id) else {
            return false;
        };

        post.title = form.title;
        post.author = form.author;
        post.content = form.content;

        true
    }

    /// Removes every post matching the id. Deleting an absent id is a no-op.
    pub async fn delete_post(&self, post_id: &PostID) {
        self.posts.write().await.retain(|post| post.id != *post_id);
    }
}

#[cfg(test)]
mod tests {
    use crate::blog::PostForm;
    use crate::state::State;

    fn form(title: &str, author: &str, content: &str) -> PostForm {
        PostForm {
            title: title.to_string(),
            author: author.to_string(),
            content: content.to_string(),
        }
    }

    #[tokio::test]
    async fn create_appends_in_insertion_order() {
        let state = State::new();
        let first = state.create_post(form("First", "A", "one")).await;
        let second = state.create_post(form("Second", "B", "two")).await;

        let posts = state.list_posts().await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, first.id);
        assert_eq!(posts[1].id, second.id);
        assert_eq!(posts[0].title, "First");
        assert_eq!(posts[1].title, "Second");
    }

    #[tokio::test]
    async fn update_preserves_id_and_date() {
        let state = State::new();
        let created = state.create_post(form("Hello", "Bo", "World")).await;

        assert!(state.update_post(&created.id, form("Hi", "Bo", "World")).await);

        let posts = state.list_posts().await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, created.id);
        assert_eq!(posts[0].date, created.date);
        assert_eq!(posts[0].title, "Hi");
        assert_eq!(posts[0].author, "Bo");
        assert_eq!(posts[0].content, "World");
    }

    #[tokio::test]
    async fn update_on_missing_id_leaves_collection_untouched() {
        let state = State::new();
        state.create_post(form("Keep", "A", "me")).await;
        let before = state.list_posts().await;

        assert!(!state.update_post(&"missing".to_string(), form("X", "Y", "Z")).await);

        let after = state.list_posts().await;
        assert_eq!(after.len(), before.len());
        assert_eq!(after[0].title, "Keep");
        assert_eq!(after[0].id, before[0].id);
    }

    #[tokio::test]
    async fn delete_removes_only_the_matching_post() {
        let state = State::new();
        let first = state.create_post(form("First", "A", "one")).await;
        let doomed = state.create_post(form("Doomed", "B", "two")).await;
        let last = state.create_post(form("Last", "C", "three")).await;

        state.delete_post(&doomed.id).await;

        let posts = state.list_posts().await;
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, first.id);
        assert_eq!(posts[1].id, last.id);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let state = State::new();
        let post = state.create_post(form("Once", "A", "gone")).await;

        state.delete_post(&post.id).await;
        let after_first = state.list_posts().await;
        state.delete_post(&post.id).await;
        let after_second = state.list_posts().await;

        assert!(after_first.is_empty());
        assert!(after_second.is_empty());
    }

    #[tokio::test]
    async fn delete_on_missing_id_is_a_no_op() {
        let state = State::new();
        state.create_post(form("Still here", "A", "yes")).await;

        state.delete_post(&"missing".to_string()).await;

        let posts = state.list_posts().await;
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Still here");
    }
}
