use crate::config::profile::{
    AssistantKind, AssistantProfile, DEFAULT_MODEL_ID, DEFAULT_RESUME_BUCKET, DEFAULT_RESUME_KEY,
};
use crate::config::toml_config::ProfileFile;
use crate::utils::error::{QaError, Result};
use crate::utils::validation::{validate_aws_region, Validate};
use std::env;

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub profile: AssistantProfile,
    pub region: Option<String>,
}

impl LambdaConfig {
    pub fn from_env(kind: AssistantKind) -> Result<Self> {
        Self::from_lookup(kind, |name| env::var(name).ok())
    }

    /// 依部署單元讀取環境變數；hr-policy 的三個變數沒有預設值
    pub fn from_lookup<F>(kind: AssistantKind, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::build(kind, &lookup, true)
    }

    /// Local runs: environment values are optional and the TOML overrides are
    /// applied before the merged configuration is validated.
    pub fn with_overrides<F>(
        kind: AssistantKind,
        lookup: F,
        overrides: Option<ProfileFile>,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::build(kind, &lookup, false)?;
        if let Some(file) = overrides {
            config.profile = file.apply_to(config.profile);
        }
        config.validate()?;
        Ok(config)
    }

    fn build<F>(kind: AssistantKind, lookup: &F, strict: bool) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |name: &str, default: &str| {
            lookup(name).unwrap_or_else(|| default.to_string())
        };
        let required = |name: &str, fallback: &str| match lookup(name) {
            Some(value) => Ok(value),
            None if strict => Err(QaError::MissingConfigError {
                field: name.to_string(),
            }),
            None => Ok(fallback.to_string()),
        };

        let profile = match kind {
            AssistantKind::InterviewAssistant => AssistantProfile::interview_assistant(
                &or_default("BUCKET_NAME", DEFAULT_RESUME_BUCKET),
                &or_default("FILE_KEY", DEFAULT_RESUME_KEY),
                &or_default("MODEL_ID", DEFAULT_MODEL_ID),
            ),
            AssistantKind::Chatbot => {
                AssistantProfile::chatbot(&or_default("BEDROCK_MODEL_ID", DEFAULT_MODEL_ID))
            }
            // 非嚴格模式下留空，交給合併後的驗證
            AssistantKind::HrPolicy => AssistantProfile::hr_policy(
                &required("BUCKET_NAME", "")?,
                &required("FILE_KEY", "")?,
                &required("MODEL_ID", DEFAULT_MODEL_ID)?,
            ),
        };

        Ok(Self {
            profile,
            region: lookup("AWS_REGION").filter(|r| !r.is_empty()),
        })
    }
}

impl Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        self.profile.validate()?;

        if let Some(region) = &self.region {
            validate_aws_region("region", region)?;
        }

        tracing::info!("✅ Lambda configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::profile::ReferenceSource;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_interview_defaults() {
        let config =
            LambdaConfig::from_lookup(AssistantKind::InterviewAssistant, lookup_from(&[]))
                .unwrap();
        assert_eq!(config.profile.model_id, DEFAULT_MODEL_ID);
        assert_eq!(
            config.profile.reference,
            ReferenceSource::PdfOcr {
                bucket: DEFAULT_RESUME_BUCKET.to_string(),
                key: DEFAULT_RESUME_KEY.to_string(),
            }
        );
        assert!(config.region.is_none());
    }

    #[test]
    fn test_chatbot_reads_bedrock_model_id() {
        let config = LambdaConfig::from_lookup(
            AssistantKind::Chatbot,
            lookup_from(&[
                ("BEDROCK_MODEL_ID", "amazon.titan-text-lite-v1"),
                ("MODEL_ID", "ignored"),
                ("AWS_REGION", "us-west-2"),
            ]),
        )
        .unwrap();
        assert_eq!(config.profile.model_id, "amazon.titan-text-lite-v1");
        assert_eq!(config.region.as_deref(), Some("us-west-2"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_hr_policy_requires_all_variables() {
        let err = LambdaConfig::from_lookup(
            AssistantKind::HrPolicy,
            lookup_from(&[("BUCKET_NAME", "labsaibucketdemo"), ("MODEL_ID", "m")]),
        )
        .unwrap_err();
        assert!(matches!(err, QaError::MissingConfigError { ref field } if field == "FILE_KEY"));

        let config = LambdaConfig::from_lookup(
            AssistantKind::HrPolicy,
            lookup_from(&[
                ("BUCKET_NAME", "labsaibucketdemo"),
                ("FILE_KEY", "HRPOLICY.txt"),
                ("MODEL_ID", DEFAULT_MODEL_ID),
            ]),
        )
        .unwrap();
        assert_eq!(
            config.profile.reference,
            ReferenceSource::Text {
                bucket: "labsaibucketdemo".to_string(),
                key: "HRPOLICY.txt".to_string(),
            }
        );
    }

    #[test]
    fn test_invalid_region_rejected() {
        let config = LambdaConfig::from_lookup(
            AssistantKind::Chatbot,
            lookup_from(&[("AWS_REGION", "US EAST")]),
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_hr_policy_overrides_without_environment() {
        let overrides = ProfileFile::from_toml_str(
            r#"
[reference]
type = "text"
bucket = "handbook"
key = "policy.txt"
"#,
        )
        .unwrap();

        let config =
            LambdaConfig::with_overrides(AssistantKind::HrPolicy, lookup_from(&[]), Some(overrides))
                .unwrap();
        assert_eq!(
            config.profile.reference,
            ReferenceSource::Text {
                bucket: "handbook".to_string(),
                key: "policy.txt".to_string(),
            }
        );
        assert_eq!(config.profile.model_id, DEFAULT_MODEL_ID);
        assert_eq!(config.profile.generation.map(|g| g.max_token_count), Some(500));
    }

    #[test]
    fn test_hr_policy_without_environment_or_overrides_fails_validation() {
        let err = LambdaConfig::with_overrides(AssistantKind::HrPolicy, lookup_from(&[]), None)
            .unwrap_err();
        assert!(matches!(
            err,
            QaError::InvalidConfigValueError { ref field, .. } if field == "reference.bucket"
        ));
    }

    #[test]
    fn test_overrides_keep_environment_region_check() {
        let err = LambdaConfig::with_overrides(
            AssistantKind::Chatbot,
            lookup_from(&[("AWS_REGION", "US EAST")]),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, QaError::InvalidConfigValueError { ref field, .. } if field == "region"));

        let config = LambdaConfig::with_overrides(
            AssistantKind::Chatbot,
            lookup_from(&[("AWS_REGION", "")]),
            None,
        )
        .unwrap();
        assert!(config.region.is_none());
    }
}
