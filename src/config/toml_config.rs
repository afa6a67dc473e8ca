use crate::core::apartment::resolve_terms;
use crate::domain::model::{ApartmentOptions, CombineOptions};
use crate::utils::error::{Result, TransformError};
use crate::utils::validation::{validate_non_empty_string, validate_probability, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var regex"));

fn default_probability() -> f64 {
    1.0
}

/// A named, ordered list of transform steps loaded from TOML.
///
/// ```toml
/// name = "noisy-addresses"
///
/// [[steps]]
/// op = "uppercase"
/// probability = 0.2
///
/// [[steps]]
/// op = "replace_apartment_terms"
/// additional_terms = ["Room"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<StepConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StepConfig {
    Lowercase {
        #[serde(default = "default_probability")]
        probability: f64,
    },
    Uppercase {
        #[serde(default = "default_probability")]
        probability: f64,
    },
    SentenceCase {
        #[serde(default = "default_probability")]
        probability: f64,
    },
    SwapLines {
        #[serde(default = "default_probability")]
        probability: f64,
    },
    CombineLines {
        #[serde(default = "default_probability")]
        probability: f64,
        #[serde(default)]
        second_line_first: Option<bool>,
        #[serde(default)]
        separator: Option<String>,
    },
    ReplaceApartmentTerms {
        #[serde(default = "default_probability")]
        probability: f64,
        #[serde(default)]
        replace_terms: Vec<String>,
        #[serde(default)]
        additional_terms: Vec<String>,
        #[serde(default)]
        exclude_terms: Vec<String>,
    },
}

impl StepConfig {
    pub fn probability(&self) -> f64 {
        match self {
            StepConfig::Lowercase { probability }
            | StepConfig::Uppercase { probability }
            | StepConfig::SentenceCase { probability }
            | StepConfig::SwapLines { probability }
            | StepConfig::CombineLines { probability, .. }
            | StepConfig::ReplaceApartmentTerms { probability, .. } => *probability,
        }
    }

    pub fn op_name(&self) -> &'static str {
        match self {
            StepConfig::Lowercase { .. } => "lowercase",
            StepConfig::Uppercase { .. } => "uppercase",
            StepConfig::SentenceCase { .. } => "sentence_case",
            StepConfig::SwapLines { .. } => "swap_lines",
            StepConfig::CombineLines { .. } => "combine_lines",
            StepConfig::ReplaceApartmentTerms { .. } => "replace_apartment_terms",
        }
    }

    pub fn combine_options(&self) -> Option<CombineOptions> {
        match self {
            StepConfig::CombineLines {
                second_line_first,
                separator,
                ..
            } => Some(CombineOptions {
                second_line_first: *second_line_first,
                separator: separator.clone(),
            }),
            _ => None,
        }
    }

    pub fn apartment_options(&self) -> Option<ApartmentOptions> {
        match self {
            StepConfig::ReplaceApartmentTerms {
                replace_terms,
                additional_terms,
                exclude_terms,
                ..
            } => Some(ApartmentOptions {
                replace_terms: replace_terms.clone(),
                additional_terms: additional_terms.clone(),
                exclude_terms: exclude_terms.clone(),
            }),
            _ => None,
        }
    }
}

impl PipelineConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML after substituting `${VAR}` references from the environment.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TransformError::TomlParse {
            message: e.to_string(),
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl Validate for PipelineConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;

        for (index, step) in self.steps.iter().enumerate() {
            validate_probability(&format!("steps[{}].probability", index), step.probability())?;

            if let Some(options) = step.apartment_options() {
                resolve_terms(&options)?;
            }
        }

        Ok(())
    }
}
