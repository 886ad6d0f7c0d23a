/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Filter directives used when `RUST_LOG` is not set.
    pub filter: Option<String>,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, json_format: bool, filter: Option<String>) -> Self {
        Self {
            environment: environment.into(),
            json_format,
            filter,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::new("Local", false, None)
    }
}
