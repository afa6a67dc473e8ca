use crate::config::{PipelineConfig, StepConfig};
use crate::core::address_lines::{combine_address_lines, swap_address_lines};
use crate::core::apartment::{replace_apartment_terms, resolve_terms};
use crate::core::case::{lowercase_entire_text, lowercase_except_first_letter, uppercase_entire_text};
use crate::core::probability::should_apply;
use crate::domain::model::{AddressInput, ApartmentOptions, CombineOptions};
use crate::domain::ports::{RandomSource, ThreadRandom};
use crate::utils::error::Result;
use crate::utils::validation::{validate_probability, Validate};

#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
    Lowercase,
    Uppercase,
    /// First letter upper, rest lower, on each line.
    SentenceCase,
    SwapLines,
    CombineLines(CombineOptions),
    ReplaceApartmentTerms(ApartmentOptions),
}

impl StepKind {
    fn apply<R: RandomSource + ?Sized>(&self, input: &AddressInput, rng: &mut R) -> Result<AddressInput> {
        let output = match self {
            StepKind::Lowercase => map_lines(input, lowercase_entire_text),
            StepKind::Uppercase => map_lines(input, uppercase_entire_text),
            StepKind::SentenceCase => map_lines(input, lowercase_except_first_letter),
            StepKind::SwapLines => swap_address_lines(input),
            StepKind::CombineLines(options) => combine_address_lines(input, options, rng),
            StepKind::ReplaceApartmentTerms(options) => replace_apartment_terms(input, options, rng)?,
        };
        Ok(output)
    }
}

fn map_lines(input: &AddressInput, transform: fn(&str) -> String) -> AddressInput {
    AddressInput {
        address: transform(&input.address),
        address2: input.address2.as_deref().map(transform),
    }
}

impl From<&StepConfig> for StepKind {
    fn from(step: &StepConfig) -> Self {
        match step {
            StepConfig::Lowercase { .. } => StepKind::Lowercase,
            StepConfig::Uppercase { .. } => StepKind::Uppercase,
            StepConfig::SentenceCase { .. } => StepKind::SentenceCase,
            StepConfig::SwapLines { .. } => StepKind::SwapLines,
            StepConfig::CombineLines { .. } => {
                StepKind::CombineLines(step.combine_options().unwrap_or_default())
            }
            StepConfig::ReplaceApartmentTerms { .. } => {
                StepKind::ReplaceApartmentTerms(step.apartment_options().unwrap_or_default())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineStep {
    pub kind: StepKind,
    pub probability: f64,
}

/// An ordered chain of address transforms, each gated by its own probability.
///
/// Every step draws once from the shared random source to decide whether it
/// runs; steps that need randomness themselves draw after that.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformPipeline {
    name: String,
    steps: Vec<PipelineStep>,
}

impl TransformPipeline {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Appends a step. Configuration problems surface here rather than at run time.
    pub fn with_step(mut self, kind: StepKind, probability: f64) -> Result<Self> {
        validate_probability("probability", probability)?;
        if let StepKind::ReplaceApartmentTerms(options) = &kind {
            resolve_terms(options)?;
        }
        self.steps.push(PipelineStep { kind, probability });
        Ok(self)
    }

    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;

        let steps = config
            .steps
            .iter()
            .map(|step| PipelineStep {
                kind: StepKind::from(step),
                probability: step.probability(),
            })
            .collect::<Vec<_>>();

        tracing::info!(pipeline = %config.name, steps = steps.len(), "built transform pipeline");

        Ok(Self {
            name: config.name.clone(),
            steps,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    pub fn run<R: RandomSource + ?Sized>(&self, input: &AddressInput, rng: &mut R) -> Result<AddressInput> {
        let mut current = input.clone();

        for (index, step) in self.steps.iter().enumerate() {
            if should_apply(rng, step.probability) {
                tracing::debug!(pipeline = %self.name, step = index, kind = ?step.kind, "applying step");
                current = step.kind.apply(&current, rng)?;
            } else {
                tracing::trace!(pipeline = %self.name, step = index, "skipping step");
            }
        }

        Ok(current)
    }

    pub fn run_default(&self, input: &AddressInput) -> Result<AddressInput> {
        self.run(input, &mut ThreadRandom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::{ErrorKind, TransformError};

    fn sequence(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut values = values.into_iter();
        move || values.next().expect("random sequence exhausted")
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let input = AddressInput::with_second_line("1 Main St", "Apt 2");
        let pipeline = TransformPipeline::new("empty");
        assert_eq!(pipeline.run_default(&input).unwrap(), input);
    }

    #[test]
    fn test_case_steps_touch_both_lines() {
        let pipeline = TransformPipeline::new("case")
            .with_step(StepKind::Uppercase, 1.0)
            .unwrap();
        let input = AddressInput::with_second_line("1 Main St", "apt 2");
        assert_eq!(
            pipeline.run(&input, &mut || 0.0).unwrap(),
            AddressInput::with_second_line("1 MAIN ST", "APT 2")
        );

        let pipeline = TransformPipeline::new("sentence")
            .with_step(StepKind::SentenceCase, 1.0)
            .unwrap();
        let input = AddressInput::new("1 MAIN ST");
        assert_eq!(pipeline.run(&input, &mut || 0.0).unwrap(), AddressInput::new("1 main st"));
    }

    #[test]
    fn test_gate_and_step_share_random_source() {
        let pipeline = TransformPipeline::new("mixed")
            .with_step(StepKind::Lowercase, 0.5)
            .unwrap()
            .with_step(StepKind::CombineLines(CombineOptions::default()), 0.5)
            .unwrap()
            .with_step(
                StepKind::ReplaceApartmentTerms(ApartmentOptions {
                    replace_terms: vec!["Unit".to_string()],
                    ..Default::default()
                }),
                0.5,
            )
            .unwrap();

        let input = AddressInput::with_second_line("1 Main St", "Apt 2");
        // lowercase skipped (0.9), combine runs (0.1) with second line first
        // (0.2) and ", " (0.0), apartment runs (0.3) and picks "Unit" (0.6).
        let mut rng = sequence(vec![0.9, 0.1, 0.2, 0.0, 0.3, 0.6]);
        let result = pipeline.run(&input, &mut rng).unwrap();
        assert_eq!(result, AddressInput::with_second_line("Unit 2, 1 Main St", ""));
    }

    #[test]
    fn test_with_step_rejects_bad_configuration() {
        let err = TransformPipeline::new("bad")
            .with_step(StepKind::Lowercase, 2.0)
            .unwrap_err();
        assert!(matches!(err, TransformError::InvalidConfigValue { .. }));

        let err = TransformPipeline::new("bad")
            .with_step(
                StepKind::ReplaceApartmentTerms(ApartmentOptions {
                    exclude_terms: vec![
                        "Apt".to_string(),
                        "Apt.".to_string(),
                        "Apartment".to_string(),
                        "Flat".to_string(),
                        "Suite".to_string(),
                        "Unit".to_string(),
                    ],
                    ..Default::default()
                }),
                1.0,
            )
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptyTermSet);
    }

    #[test]
    fn test_from_config() {
        let config = PipelineConfig::from_toml_str(
            r#"
name = "swap-then-combine"

[[steps]]
op = "swap_lines"

[[steps]]
op = "combine_lines"
second_line_first = false
separator = " / "
"#,
        )
        .unwrap();

        let pipeline = TransformPipeline::from_config(&config).unwrap();
        assert_eq!(pipeline.name(), "swap-then-combine");
        assert_eq!(pipeline.steps().len(), 2);
        assert_eq!(pipeline.steps()[0].kind, StepKind::SwapLines);

        let input = AddressInput::with_second_line("10 High St", "Flat 4");
        let result = pipeline.run(&input, &mut || 0.0).unwrap();
        assert_eq!(result, AddressInput::with_second_line("Flat 4 / 10 High St", ""));
    }
}
