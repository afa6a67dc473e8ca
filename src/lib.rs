//! Address text transforms: case folding, address line swap/combine,
//! apartment designator randomization and a probability gate to apply any
//! of them only some of the time.
//!
//! Every function is pure apart from its random source, which is injected
//! through [`RandomSource`] so callers can pin the sequence in tests.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{PipelineConfig, StepConfig};
pub use crate::core::{
    address_lines::{
        combine_address_lines, combine_address_lines_default, swap_address_lines,
        DEFAULT_SEPARATORS,
    },
    apartment::{
        replace_apartment_terms, replace_apartment_terms_default, resolve_terms,
        DEFAULT_APARTMENT_TERMS,
    },
    case::{lowercase_entire_text, lowercase_except_first_letter, uppercase_entire_text},
    pipeline::{PipelineStep, StepKind, TransformPipeline},
    probability::{apply_with_default_probability, apply_with_probability},
};
pub use crate::domain::model::{AddressInput, ApartmentOptions, CombineOptions};
pub use crate::domain::ports::{RandomSource, ThreadRandom, Transform};
pub use crate::utils::error::{ErrorKind, Result, TransformError};
