use std::fmt;

/// Feedback text produced by the language model. Not parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis(String);

impl Analysis {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
