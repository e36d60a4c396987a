mod meta;
mod url;

pub use meta::{GreetingResponse, HealthResponse, TimestampResponse, WhoamiResponse};
pub use url::{CreateShortUrlRequest, CreateShortUrlResponse};
