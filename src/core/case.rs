//! Whole-string case transforms. Case mapping is Unicode-aware but not
//! locale-sensitive.

pub fn lowercase_entire_text(text: &str) -> String {
    text.to_lowercase()
}

pub fn uppercase_entire_text(text: &str) -> String {
    text.to_uppercase()
}

/// Uppercases the first character and lowercases the rest.
///
/// The first character is taken as a `char`, so a leading `ß` becomes `SS`.
/// An empty string stays empty.
pub fn lowercase_except_first_letter(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}
