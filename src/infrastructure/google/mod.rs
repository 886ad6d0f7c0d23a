mod auth;
mod http_client;

pub use auth::GoogleAuth;
pub use http_client::build_http_client;
pub(crate) use http_client::error_body;
