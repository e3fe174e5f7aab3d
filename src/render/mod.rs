use crate::domain::Page;
use anyhow::{Context, Result};
use tera::Tera;

const VIEW_TEMPLATE: &str = "view.html";
const EDIT_TEMPLATE: &str = "edit.html";

/// Immutable template renderer, parsed once at startup and shared by handlers.
/// Tera auto-escapes HTML for `.html` templates, so page bodies can't inject
/// markup into the rendered presentation.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new(templates_glob: &str) -> Result<Self> {
        let tera = Tera::new(templates_glob)
            .context(format!("Failed to parse templates at {templates_glob}"))?;

        // both presentations have to exist before the server accepts requests
        for required in [VIEW_TEMPLATE, EDIT_TEMPLATE] {
            if !tera.get_template_names().any(|name| name == required) {
                anyhow::bail!("Missing required template {required} under {templates_glob}");
            }
        }

        Ok(Self { tera })
    }

    pub fn render_view(&self, page: &Page) -> Result<String> {
        self.render(VIEW_TEMPLATE, page)
    }

    pub fn render_edit(&self, page: &Page) -> Result<String> {
        self.render(EDIT_TEMPLATE, page)
    }

    fn render(&self, template: &str, page: &Page) -> Result<String> {
        let mut context = tera::Context::new();
        context.insert("title", &page.title);
        context.insert("body", &page.body);

        self.tera
            .render(template, &context)
            .context(format!("Failed to render template {template}"))
    }
}
