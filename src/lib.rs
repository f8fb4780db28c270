pub mod app;
pub mod feed;
pub mod fetch;
pub mod output;
pub mod stats;
pub mod validate;
