/// A named text document backed 1:1 by a `<title>.txt` file on disk.
/// The title doubles as the storage key; the body is the entire file content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: String,
}

impl Page {
    pub fn new(title: String, body: String) -> Self {
        Self { title, body }
    }

    // the "new page" case: a title that has no file behind it yet
    pub fn blank(title: String) -> Self {
        Self {
            title,
            body: String::new(),
        }
    }
}
