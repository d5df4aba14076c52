use super::*;
use crate::alphabet::table::CODE_TABLE;

/// Table-order string substitution, the way the cipher was first specified.
fn encode_by_substitution(clean_text: &str, columns: u32) -> String {
    let mut msg = clean_text.to_string();
    for e in CODE_TABLE {
        msg = msg.replace(e.symbol, e.code);
    }
    let per_row = (columns / 2) as usize;
    while msg.len() % per_row != 0 {
        msg.push('0');
    }
    msg
}

#[test]
fn encodes_reference_message() {
    let bits = encode("ab,", 6).unwrap();
    assert_eq!(bits.as_str(), "111110100100100100");
    assert_eq!(bits.len(), 18);
}

#[test]
fn no_padding_when_already_aligned() {
    // "a" is three bits; three bits per row.
    let bits = encode("a", 6).unwrap();
    assert_eq!(bits.as_str(), "111");
}

#[test]
fn empty_text_is_empty_stream() {
    let bits = encode("", 10).unwrap();
    assert!(bits.is_empty());
    assert_eq!(bits.bits().len(), 0);
}

#[test]
fn degenerate_columns_are_rejected() {
    for columns in [0, 1, 3, 7] {
        let err = encode("abc", columns).unwrap_err();
        assert!(
            matches!(err, KronkelError::InvalidConfiguration(_)),
            "{columns}: {err}"
        );
    }
}

#[test]
fn huge_column_counts_are_rejected_before_padding() {
    let err = encode("a", u32::MAX - 1).unwrap_err();
    assert!(matches!(err, KronkelError::InvalidConfiguration(_)), "{err}");
    encode("a", 2 * crate::config::params::MAX_WIDTH).unwrap();
}

#[test]
fn length_is_multiple_of_half_columns() {
    let texts = ["", "a", "ab,", "kronkelschrift", "the,quick,brown,fox", "zzzzzzz"];
    for text in texts {
        for columns in (2..=40).step_by(2) {
            let bits = encode(text, columns).unwrap();
            assert_eq!(bits.len() % (columns as usize / 2), 0, "{text:?} {columns}");
        }
    }
}

#[test]
fn lookup_matches_table_substitution() {
    let texts = [
        "abcdefghijklmnopqrstuvwxyz,",
        ",zyxwvutsrqponmlkjihgfedcba",
        "hello,world",
        "mississippi",
    ];
    for text in texts {
        for columns in [2, 6, 16, 30] {
            assert_eq!(
                encode(text, columns).unwrap().as_str(),
                encode_by_substitution(text, columns),
                "{text:?} {columns}"
            );
        }
    }
}

#[test]
fn is_deterministic() {
    let a = encode("kronkel,schrift", 12).unwrap();
    let b = encode("kronkel,schrift", 12).unwrap();
    assert_eq!(a, b);
}

#[test]
fn bits_iterator_follows_characters() {
    let bits = encode("b", 2).unwrap();
    assert_eq!(bits.bits().collect::<Vec<_>>(), vec![true, true, false, true]);
}
