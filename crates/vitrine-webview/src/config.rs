/// Configuration for attaching an embedded browser control.
#[derive(Debug, Clone, Default)]
pub struct ControlConfig {
    /// Initial URL to load. `None` renders an empty page.
    pub initial_url: Option<String>,
    /// Custom user agent string. `None` keeps the engine default.
    pub user_agent: Option<String>,
}

impl ControlConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            initial_url: Some(url.into()),
            ..Default::default()
        }
    }
}
