use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use log::info;

use crate::error::ConfigError;
use crate::quiz::categorize::Categorization;
use crate::quiz::choice::{Answer, Question, TrueFalse};
use crate::quiz::matching::AnswerKey;
use crate::quiz::number_line::NumberLine;

/// Environment variable naming a JSON quiz config file.
pub const CONFIG_PATH_VAR: &str = "QUIZ_CONFIG";

const DEFAULT_ANNOUNCEMENT_TTL_MS: u64 = 1000;

fn default_announcement_ttl_ms() -> u64 {
    DEFAULT_ANNOUNCEMENT_TTL_MS
}

/// Answer keys for every question on the page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizConfig {
    pub matching: AnswerKey,
    #[serde(default)]
    pub drag_drop: Categorization,
    #[serde(default)]
    pub number_line: NumberLine,
    #[serde(default)]
    pub multiple_choice: Vec<Question>,
    #[serde(default)]
    pub multiple_select: Vec<Question>,
    #[serde(default)]
    pub true_false: Vec<TrueFalse>,
    /// How long a result announcement stays in the live region.
    #[serde(default = "default_announcement_ttl_ms")]
    pub announcement_ttl_ms: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        let strings = |values: &[&str]| values.iter().map(|v| v.to_string()).collect::<Vec<_>>();
        let answers = |options: &[(&str, bool)]| {
            options
                .iter()
                .map(|(text, is_correct)| Answer::new(text.to_string(), *is_correct))
                .collect::<Vec<_>>()
        };

        Self {
            matching: AnswerKey::new([
                ("apple", "fruit"),
                ("carrot", "vegetable"),
                ("salmon", "protein"),
            ]),
            drag_drop: Categorization::new(BTreeMap::from([
                ("odd".to_string(), strings(&["1", "3", "5"])),
                ("even".to_string(), strings(&["2", "4"])),
            ])),
            number_line: NumberLine::new(
                ["-5", "-2", "0", "1", "4"]
                    .iter()
                    .map(|v| (v.to_string(), v.to_string()))
                    .collect(),
            ),
            multiple_choice: vec![Question::new(
                "What is the capital of France?".to_string(),
                answers(&[("Paris", true), ("Rome", false), ("Madrid", false)]),
            )],
            multiple_select: vec![Question::new(
                "Which of these are prime numbers?".to_string(),
                answers(&[("2", true), ("3", true), ("4", false), ("9", false)]),
            )],
            true_false: vec![TrueFalse::new(
                "The Earth orbits the Sun.".to_string(),
                true,
            )],
            announcement_ttl_ms: DEFAULT_ANNOUNCEMENT_TTL_MS,
        }
    }
}

impl QuizConfig {
    pub fn from_json(path: &Path, text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(path, &text)?;
        info!(
            "Loaded quiz config from {} ({} matching pairs)",
            path.display(),
            config.matching.len()
        );
        Ok(config)
    }

    /// Loads the file named by `QUIZ_CONFIG`, or the built-in sample when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_PATH_VAR) {
            Some(path) => Self::load(path),
            None => {
                info!("{} not set, using the built-in quiz", CONFIG_PATH_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn announcement_ttl(&self) -> Duration {
        Duration::from_millis(self.announcement_ttl_ms)
    }
}
