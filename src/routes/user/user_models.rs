use serde::Deserialize;

// Create and update share one body; an `id` in the body is ignored
#[derive(Deserialize)]
pub struct UserRequest {
    pub username: String,
}
