use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateShortUrlRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct CreateShortUrlResponse {
    /// The raw URL exactly as submitted.
    pub original_url: String,
    /// The generated identifier, not a full URL.
    pub short_url: String,
}
