use crate::alphabet::table::is_supported;

/// Lowercase `raw` and drop every character outside `a`..=`z` and `,`.
///
/// Lowercasing follows Unicode rules before filtering, so `"Ä"` is dropped while `"K"` (Kelvin
/// sign) becomes `k`. Total and idempotent; may return an empty string.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| is_supported(c))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/normalize.rs"]
mod tests;
