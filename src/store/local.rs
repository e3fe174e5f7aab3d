use crate::domain::Page;
use crate::domain::title::is_valid_title;
use crate::store::PageStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct LocalPageStore {
    root: PathBuf,
}

impl LocalPageStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    // every page is exactly one file named <title>.txt under the root
    fn page_path(&self, title: &str) -> PathBuf {
        self.root.join(format!("{title}.txt"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl PageStore for LocalPageStore {
    async fn load_page(&self, title: &str) -> Result<Option<Page>> {
        let path = self.page_path(title);

        match tokio::fs::read_to_string(&path).await {
            Ok(body) => Ok(Some(Page::new(title.to_string(), body))),

            // no file behind this title yet
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),

            Err(err) => Err(anyhow::Error::new(err)
                .context(format!("Failed to read page file {}", path.display()))),
        }
    }

    async fn save_page(&self, page: &Page) -> Result<()> {
        let path = self.page_path(&page.title);

        // plain overwrite, exactly the body bytes and nothing else
        // a crash mid-write can leave a partial file; accepted as-is
        tokio::fs::write(&path, page.body.as_bytes())
            .await
            .context(format!("Failed to write page file {}", path.display()))?;

        Ok(())
    }

    async fn list_titles(&self) -> Result<Vec<String>> {
        let mut titles = Vec::new();

        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            // skip anything that isn't a file
            if !entry.file_type().is_file() {
                continue;
            }

            // work with only page files
            if entry.path().extension().and_then(|s| s.to_str()) != Some("txt") {
                continue;
            }

            let Some(stem) = entry.path().file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            // a stem that couldn't have come through a save request isn't a page
            if is_valid_title(stem) {
                titles.push(stem.to_string());
            }
        }

        titles.sort();
        Ok(titles)
    }
}
