use crate::config::profile::{AssistantProfile, ReferenceSource};
use crate::domain::model::GenerationConfig;
use crate::utils::error::{QaError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Overrides applied on top of a built-in assistant profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileFile {
    #[serde(default)]
    pub assistant: AssistantSection,
    pub reference: Option<ReferenceSource>,
    pub generation: Option<GenerationConfig>,
    #[serde(default)]
    pub messages: MessagesSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssistantSection {
    pub name: Option<String>,
    pub model_id: Option<String>,
    pub prompt_template: Option<String>,
    pub fallback_answer: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessagesSection {
    pub missing_question: Option<String>,
    pub invalid_body: Option<String>,
}

impl ProfileFile {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(QaError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| QaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MODEL_ID})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| QaError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn apply_to(self, mut profile: AssistantProfile) -> AssistantProfile {
        let assistant = self.assistant;
        if let Some(name) = assistant.name {
            profile.name = name;
        }
        if let Some(model_id) = assistant.model_id {
            profile.model_id = model_id;
        }
        if let Some(template) = assistant.prompt_template {
            profile.prompt_template = template;
        }
        if let Some(fallback) = assistant.fallback_answer {
            profile.fallback_answer = fallback;
        }
        if let Some(reference) = self.reference {
            profile.reference = reference;
        }
        if let Some(generation) = self.generation {
            profile.generation = Some(generation);
        }
        if let Some(message) = self.messages.missing_question {
            profile.messages.missing_question = message;
        }
        if let Some(message) = self.messages.invalid_body {
            profile.messages.invalid_body = message;
        }
        profile
    }
}
