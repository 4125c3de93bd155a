use rand::{RngCore, SeedableRng};
use serde::Deserialize;
use std::fmt::Write;

pub type PostID = String;

pub const BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 3000);
pub const PUBLIC_PATH: &str = "public";

pub const POST_ID_BYTES: usize = 16;

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostID,
    pub title: String,
    pub author: String,
    pub content: String,
    // formatted once at creation, untouched by edits
    pub date: String,
}

/// Form fields for creating or editing a post. Absent fields coerce to
/// empty strings rather than rejecting the submission.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

impl Post {
    pub fn create(form: PostForm) -> Post {
        Post {
            id: get_random_hex_string::<POST_ID_BYTES>(),
            title: form.title,
            author: form.author,
            content: form.content,
            date: chrono::Local::now()
                .format("%-m/%-d/%Y, %-I:%M:%S %p")
                .to_string(),
        }
    }
}

pub fn get_random_hex_string<const LEN: usize>() -> String {
    let mut bytes = [0u8; LEN];
    rand_chacha::ChaCha20Rng::from_entropy().fill_bytes(&mut bytes);

    bytes.iter().fold(String::new(), |mut output, b| {
        let _ = write!(output, "{b:02x}");
        output
    })
}
