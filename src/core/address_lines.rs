use crate::domain::model::{AddressInput, CombineOptions};
use crate::domain::ports::{RandomSource, ThreadRandom};

/// Separator candidates for [`combine_address_lines`]. Repeated entries
/// weight the pick, so `", "` is three times as likely as the others.
pub const DEFAULT_SEPARATORS: [&str; 7] = [", ", ", ", ", ", " ", ",", " - ", ". "];

/// Swaps `address` and `address2`, unless the second line is absent or blank,
/// in which case the input is returned as-is (blank content kept verbatim).
pub fn swap_address_lines(input: &AddressInput) -> AddressInput {
    let Some(second) = input.address2.as_ref().filter(|_| input.has_second_line()) else {
        return input.clone();
    };

    AddressInput {
        address: second.clone(),
        address2: Some(input.address.clone()),
    }
}

/// Joins both lines into `address` and leaves `address2` empty.
///
/// Order and separator come from `options` when set; otherwise each is drawn
/// from `rng` (order first, then separator). Inputs without a meaningful
/// second line come back unchanged and consume no draws.
pub fn combine_address_lines<R: RandomSource + ?Sized>(
    input: &AddressInput,
    options: &CombineOptions,
    rng: &mut R,
) -> AddressInput {
    let Some(second) = input.address2.as_deref().filter(|_| input.has_second_line()) else {
        return input.clone();
    };

    let second_line_first = options
        .second_line_first
        .unwrap_or_else(|| rng.next_f64() < 0.5);

    let separator = match options.separator.as_deref() {
        Some(separator) => separator,
        None => DEFAULT_SEPARATORS[rng.pick_index(DEFAULT_SEPARATORS.len())],
    };

    let (first, last) = if second_line_first {
        (second, input.address.as_str())
    } else {
        (input.address.as_str(), second)
    };

    tracing::trace!(second_line_first, separator, "combining address lines");

    AddressInput {
        address: format!("{first}{separator}{last}"),
        address2: Some(String::new()),
    }
}

pub fn combine_address_lines_default(input: &AddressInput, options: &CombineOptions) -> AddressInput {
    combine_address_lines(input, options, &mut ThreadRandom)
}
