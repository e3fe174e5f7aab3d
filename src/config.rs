use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct QuipuConfig {
    pub bind_addr: String,
    pub pages_dir: PathBuf,
    pub templates_glob: String,
}

impl QuipuConfig {
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        // pages live in the working directory unless told otherwise
        let pages_dir =
            PathBuf::from(std::env::var("PAGES_DIR").unwrap_or_else(|_| ".".to_string()));

        let templates_glob = std::env::var("TEMPLATES_GLOB")
            .unwrap_or_else(|_| "templates/**/*.html".to_string());

        Self {
            bind_addr,
            pages_dir,
            templates_glob,
        }
    }
}
