//! Content-safety settings forwarded with every Gemini request.
//!
//! Thresholds are applied by the remote service, not enforced locally; this
//! module only carries them in the wire format the API expects.

use serde::{Deserialize, Serialize};

/// Harm category recognized by the Generative Language API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarmCategory {
    #[serde(rename = "HARM_CATEGORY_HARASSMENT")]
    Harassment,
    #[serde(rename = "HARM_CATEGORY_HATE_SPEECH")]
    HateSpeech,
    #[serde(rename = "HARM_CATEGORY_SEXUALLY_EXPLICIT")]
    SexuallyExplicit,
    #[serde(rename = "HARM_CATEGORY_DANGEROUS_CONTENT")]
    DangerousContent,
}

/// Blocking severity for one harm category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HarmBlockThreshold {
    BlockNone,
    BlockOnlyHigh,
    BlockMediumAndAbove,
    BlockLowAndAbove,
}

/// One `safetySettings` entry: a category paired with its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySetting {
    pub category: HarmCategory,
    pub threshold: HarmBlockThreshold,
}

impl SafetySetting {
    pub fn new(category: HarmCategory, threshold: HarmBlockThreshold) -> Self {
        Self {
            category,
            threshold,
        }
    }
}

/// The tutor's default policy: every category blocked at medium and above.
pub fn default_safety_settings() -> Vec<SafetySetting> {
    [
        HarmCategory::Harassment,
        HarmCategory::HateSpeech,
        HarmCategory::SexuallyExplicit,
        HarmCategory::DangerousContent,
    ]
    .into_iter()
    .map(|category| SafetySetting::new(category, HarmBlockThreshold::BlockMediumAndAbove))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_serializes_in_wire_casing() {
        let setting = SafetySetting::new(
            HarmCategory::HateSpeech,
            HarmBlockThreshold::BlockMediumAndAbove,
        );
        let json = serde_json::to_value(setting).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "category": "HARM_CATEGORY_HATE_SPEECH",
                "threshold": "BLOCK_MEDIUM_AND_ABOVE",
            })
        );
    }

    #[test]
    fn all_thresholds_have_wire_names() {
        for (threshold, expected) in [
            (HarmBlockThreshold::BlockNone, "\"BLOCK_NONE\""),
            (HarmBlockThreshold::BlockOnlyHigh, "\"BLOCK_ONLY_HIGH\""),
            (
                HarmBlockThreshold::BlockMediumAndAbove,
                "\"BLOCK_MEDIUM_AND_ABOVE\"",
            ),
            (
                HarmBlockThreshold::BlockLowAndAbove,
                "\"BLOCK_LOW_AND_ABOVE\"",
            ),
        ] {
            assert_eq!(serde_json::to_string(&threshold).unwrap(), expected);
        }
    }

    #[test]
    fn defaults_cover_every_category_at_medium() {
        let settings = default_safety_settings();
        assert_eq!(settings.len(), 4);
        for setting in settings {
            assert_eq!(setting.threshold, HarmBlockThreshold::BlockMediumAndAbove);
        }
    }
}
