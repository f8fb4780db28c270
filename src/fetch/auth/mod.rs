//! Access-key decoration for [`HttpClient`](super::HttpClient) implementations.

mod url_param;

pub use url_param::UrlParam;
