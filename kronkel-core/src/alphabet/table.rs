/// One entry of the Kronkelschrift alphabet: a symbol and its binary code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CodeEntry {
    /// The plain-text symbol (`a`..=`z` or `,`).
    pub symbol: char,
    /// Code over `{'0', '1'}`, 3 to 9 bits long.
    pub code: &'static str,
}

const fn entry(symbol: char, code: &'static str) -> CodeEntry {
    CodeEntry { symbol, code }
}

/// The fixed Kronkelschrift alphabet, in table order.
///
/// The codes are prefix-free, so text can be encoded by plain per-symbol concatenation.
pub const CODE_TABLE: [CodeEntry; 27] = [
    entry('a', "111"),
    entry('b', "1101"),
    entry('c', "11001"),
    entry('d', "1011"),
    entry('e', "10101"),
    entry('f', "101001"),
    entry('g', "10011"),
    entry('h', "100101"),
    entry('i', "1001001"),
    entry('j', "0111"),
    entry('k', "01101"),
    entry('l', "011001"),
    entry('m', "01011"),
    entry('n', "010101"),
    entry('o', "0101001"),
    entry('p', "010011"),
    entry('q', "0100101"),
    entry('r', "01001001"),
    entry('s', "00111"),
    entry('t', "001101"),
    entry('u', "0011001"),
    entry('v', "001011"),
    entry('w', "0010101"),
    entry('x', "00101001"),
    entry('y', "0010011"),
    entry('z', "00100101"),
    entry(',', "001001001"),
];

/// Whether `c` belongs to the supported alphabet.
pub fn is_supported(c: char) -> bool {
    c.is_ascii_lowercase() || c == ','
}

/// Look up the code for `symbol`.
///
/// Returns `None` for symbols outside the alphabet; the normalizer removes those before
/// encoding.
pub fn code_for(symbol: char) -> Option<&'static str> {
    match symbol {
        'a'..='z' => Some(CODE_TABLE[(symbol as u8 - b'a') as usize].code),
        ',' => Some(CODE_TABLE[26].code),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/alphabet/table.rs"]
mod tests;
