//! Output configuration types

/// Configuration for the HTML document shell.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Document and page title.
    pub title: String,
    /// `lang` attribute of the document root.
    pub lang: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Структура изделия".to_string(),
            lang: "ru".to_string(),
        }
    }
}
