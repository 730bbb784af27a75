pub mod cache;
pub mod http;
pub mod notify;
