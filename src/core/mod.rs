pub mod address_lines;
pub mod apartment;
pub mod case;
pub mod pipeline;
pub mod probability;

pub use crate::domain::model::{AddressInput, ApartmentOptions, CombineOptions};
pub use crate::domain::ports::{RandomSource, ThreadRandom, Transform};
pub use crate::utils::error::Result;
