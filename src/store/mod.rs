use crate::domain::Page;
use anyhow::Result;
use async_trait::async_trait;

pub mod local;

// a pagestore can be shared between request handlers (referencable)
// generic contract for page persistence, filesystem implementation in "local.rs"
#[async_trait]
pub trait PageStore: Send + Sync {
    // a missing page is Ok(None); anything else that stops the read is an error
    async fn load_page(&self, title: &str) -> Result<Option<Page>>;

    // overwrites any existing content for the same title, last writer wins
    async fn save_page(&self, page: &Page) -> Result<()>;

    async fn list_titles(&self) -> Result<Vec<String>>;
}
