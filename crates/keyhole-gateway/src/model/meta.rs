use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub greeting: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TimestampResponse {
    /// Unix time in milliseconds.
    pub unix: i64,
    /// The same instant as an RFC-1123-style GMT string.
    pub utc: String,
}

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub ipaddress: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,
}
