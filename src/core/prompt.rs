use crate::utils::error::{QaError, Result};
use regex::{Captures, Regex};

pub struct PromptTemplate {
    template: String,
    placeholder: Regex,
}

impl PromptTemplate {
    pub fn new(template: &str) -> Result<Self> {
        let placeholder =
            Regex::new(r"\{(context|question)\}").map_err(|e| QaError::ConfigError {
                message: format!("Invalid placeholder pattern: {}", e),
            })?;

        Ok(Self {
            template: template.to_string(),
            placeholder,
        })
    }

    /// Single pass: text inserted for one placeholder is never re-scanned.
    pub fn render(&self, context: Option<&str>, question: &str) -> String {
        self.placeholder
            .replace_all(&self.template, |caps: &Captures| match &caps[1] {
                "context" => context.unwrap_or_default().to_string(),
                _ => question.to_string(),
            })
            .into_owned()
    }
}
