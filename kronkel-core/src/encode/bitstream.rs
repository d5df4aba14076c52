use crate::{
    alphabet::table::code_for,
    config::params::MAX_WIDTH,
    foundation::error::{KronkelError, KronkelResult},
};

/// A padded sequence of bits, stored as ASCII `'0'`/`'1'`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Bitstream(String);

impl Bitstream {
    /// Number of bits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the empty message.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The bits as a `'0'`/`'1'` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate the bits in stream order, `true` for `'1'`.
    pub fn bits(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'1')
    }
}

impl std::fmt::Display for Bitstream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Number of bits per grid row for a column count, rejecting degenerate grids.
pub(crate) fn bits_per_row(columns: u32) -> KronkelResult<usize> {
    if columns < 2 {
        return Err(KronkelError::invalid_configuration(format!(
            "columns must be >= 2, got {columns}"
        )));
    }
    if columns % 2 != 0 {
        return Err(KronkelError::invalid_configuration(format!(
            "columns must be even, got {columns}"
        )));
    }
    if columns / 2 > MAX_WIDTH {
        return Err(KronkelError::invalid_configuration(format!(
            "columns must be <= {}, got {columns}",
            2 * MAX_WIDTH
        )));
    }
    Ok((columns / 2) as usize)
}

/// Encode normalized text into a bitstream padded for a grid of `columns` columns.
///
/// Each symbol is replaced by its code and the codes are concatenated. Because every symbol is
/// a single character and the codes are prefix-free, this gives the same result as replacing
/// symbols table entry by table entry, in one pass over the text. Symbols without a code
/// contribute nothing. The result is padded with `'0'` until its length is a multiple of
/// `columns / 2`; empty text stays empty.
pub fn encode(clean_text: &str, columns: u32) -> KronkelResult<Bitstream> {
    let per_row = bits_per_row(columns)?;

    let mut bits = String::with_capacity(clean_text.len() * 9 + per_row);
    for code in clean_text.chars().filter_map(code_for) {
        bits.push_str(code);
    }

    let rem = bits.len() % per_row;
    if rem != 0 {
        bits.extend(std::iter::repeat_n('0', per_row - rem));
    }
    Ok(Bitstream(bits))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/bitstream.rs"]
mod tests;
