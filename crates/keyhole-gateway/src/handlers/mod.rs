mod health;
mod meta;
mod shorturl;
mod timestamp;

pub use health::health_handler;
pub use meta::{hello_handler, whoami_handler};
pub use shorturl::{create_short_url_handler, redirect_handler};
pub use timestamp::{current_timestamp_handler, timestamp_handler};
