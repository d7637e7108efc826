mod http;

pub use http::{HttpClient, HTTP_USER_AGENT};
