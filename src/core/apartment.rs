//! Apartment designator randomization.
//!
//! Finds the first `designator + unit number` pair in each address line
//! (`Apt 5`, `suite12B`, `No. 7`) and swaps the designator for a synonym
//! drawn from the effective term set. The whitespace between designator and
//! number, the number itself and everything outside the match are kept
//! byte-for-byte.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::domain::model::{AddressInput, ApartmentOptions};
use crate::domain::ports::{RandomSource, ThreadRandom};
use crate::utils::error::{Result, TransformError};

/// Canonical spellings used as substitutes when no custom terms are given.
pub const DEFAULT_APARTMENT_TERMS: [&str; 6] = ["Apt", "Apt.", "Apartment", "Flat", "Suite", "Unit"];

/// Designator, optional whitespace, digits with an optional unit letter.
/// The leading `\b` keeps designators inside longer words from matching.
static APARTMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?P<term>apartment|apt\.?|flat|suite|ste\.?|unit|no\.?)(?P<space>\s*)(?P<number>\d+[a-z]?)")
        .expect("valid apartment regex")
});

/// Resolves the effective term set for `options`.
///
/// Fails with [`TransformError::ConflictingOptions`] when `replace_terms` is
/// combined with other lists, and [`TransformError::EmptyTermSet`] when
/// exclusions leave nothing to pick from. Duplicates are kept and weight the
/// random pick.
pub fn resolve_terms(options: &ApartmentOptions) -> Result<Vec<String>> {
    let replacing = !options.replace_terms.is_empty();

    if replacing && !options.additional_terms.is_empty() {
        return Err(TransformError::ConflictingOptions {
            message: "replace_terms cannot be combined with additional_terms".to_string(),
        });
    }
    if replacing && !options.exclude_terms.is_empty() {
        return Err(TransformError::ConflictingOptions {
            message: "replace_terms cannot be combined with exclude_terms".to_string(),
        });
    }

    let mut terms: Vec<String> = if replacing {
        options.replace_terms.clone()
    } else {
        DEFAULT_APARTMENT_TERMS
            .iter()
            .map(|term| term.to_string())
            .chain(options.additional_terms.iter().cloned())
            .collect()
    };

    if !options.exclude_terms.is_empty() {
        let excluded: Vec<String> = options
            .exclude_terms
            .iter()
            .map(|term| normalize_term(term))
            .collect();
        terms.retain(|term| !excluded.contains(&normalize_term(term)));
    }

    if terms.is_empty() {
        return Err(TransformError::EmptyTermSet);
    }

    Ok(terms)
}

fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Replaces the first apartment designator in both address lines.
///
/// Options are validated before any text is scanned. An absent `address2`
/// is treated as an empty line, so the result always carries `Some(..)`.
pub fn replace_apartment_terms<R: RandomSource + ?Sized>(
    input: &AddressInput,
    options: &ApartmentOptions,
    rng: &mut R,
) -> Result<AddressInput> {
    let terms = resolve_terms(options)?;

    let address = replace_in_line(&input.address, &terms, rng);
    let address2 = replace_in_line(input.address2.as_deref().unwrap_or(""), &terms, rng);

    Ok(AddressInput {
        address,
        address2: Some(address2),
    })
}

pub fn replace_apartment_terms_default(
    input: &AddressInput,
    options: &ApartmentOptions,
) -> Result<AddressInput> {
    replace_apartment_terms(input, options, &mut ThreadRandom)
}

/// Rewrites the first match in `line`. Draws from `rng` only on a match.
fn replace_in_line<R: RandomSource + ?Sized>(line: &str, terms: &[String], rng: &mut R) -> String {
    let Some((caps, whole)) = APARTMENT_RE
        .captures(line)
        .and_then(|caps| caps.get(0).map(|whole| (caps, whole)))
    else {
        return line.to_string();
    };

    let replacement = &terms[rng.pick_index(terms.len())];
    tracing::trace!(
        matched = whole.as_str(),
        replacement = replacement.as_str(),
        "replacing apartment designator"
    );

    let mut out = String::with_capacity(line.len() + replacement.len());
    out.push_str(&line[..whole.start()]);
    out.push_str(replacement);
    push_group(&mut out, &caps, "space");
    push_group(&mut out, &caps, "number");
    out.push_str(&line[whole.end()..]);
    out
}

fn push_group(out: &mut String, caps: &Captures<'_>, name: &str) {
    if let Some(group) = caps.name(name) {
        out.push_str(group.as_str());
    }
}
