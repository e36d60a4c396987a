use crate::model::{GreetingResponse, WhoamiResponse};
use axum::extract::ConnectInfo;
use axum::http::{header, HeaderMap};
use axum::Json;
use std::net::SocketAddr;

pub async fn hello_handler() -> Json<GreetingResponse> {
    Json(GreetingResponse {
        greeting: "hello API",
    })
}

pub async fn whoami_handler(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> Json<WhoamiResponse> {
    let header_value = |name| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };

    Json(WhoamiResponse {
        ipaddress: addr.ip().to_string(),
        language: header_value(header::ACCEPT_LANGUAGE),
        software: header_value(header::USER_AGENT),
    })
}
