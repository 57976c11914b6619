use axum::{
    debug_handler,
    response::{Html, IntoResponse},
};

#[macro_export]
macro_rules! include_res {
    (bytes, $p:expr) => {
        include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
    (str, $p:expr) => {
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/res", $p))
    };
}

#[debug_handler]
pub async fn terminal() -> impl IntoResponse {
    Html(include_res!(str, "/pages/terminal.html"))
}
