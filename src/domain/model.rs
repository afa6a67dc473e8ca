use serde::{Deserialize, Serialize};

/// A two-line postal address. Operations never mutate it; they return a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInput {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
}

impl AddressInput {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            address2: None,
        }
    }

    pub fn with_second_line(address: impl Into<String>, address2: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            address2: Some(address2.into()),
        }
    }

    /// Whether `address2` carries anything besides whitespace.
    /// Absent and blank second lines are treated the same.
    pub fn has_second_line(&self) -> bool {
        self.address2
            .as_deref()
            .is_some_and(|line| !line.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombineOptions {
    /// `None` means a fair coin flip per call.
    #[serde(default)]
    pub second_line_first: Option<bool>,
    /// `None` means a weighted pick from the default separators.
    #[serde(default)]
    pub separator: Option<String>,
}

/// Term configuration for the apartment designator replacer.
///
/// Empty vectors count as "not provided". `replace_terms` may not be
/// combined with either of the other two lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApartmentOptions {
    pub replace_terms: Vec<String>,
    pub additional_terms: Vec<String>,
    pub exclude_terms: Vec<String>,
}
