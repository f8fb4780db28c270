use async_trait::async_trait;
use reqwest::{Request, Response};

/// Transport seam between request construction and execution. Auth decorators
/// wrap it; tests substitute it.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}
