use super::*;

#[test]
fn defaults_derive_from_tile() {
    let p = GenerateParams::default();
    assert_eq!(p.tile, 8.0);
    assert_eq!(p.margin, 24.0);
    assert_eq!(p.line_width, 6.0);
    assert_eq!(p.desired_width, DEFAULT_WIDTH);
    p.validate().unwrap();

    let p = GenerateParams::with_tile(12.0);
    assert_eq!(p.margin, 36.0);
    assert_eq!(p.line_width, 9.0);
}

#[test]
fn columns_double_the_width() {
    let p = GenerateParams {
        desired_width: 3,
        ..GenerateParams::default()
    };
    assert_eq!(p.columns().unwrap(), 6);
}

#[test]
fn zero_width_is_invalid_configuration() {
    let p = GenerateParams {
        desired_width: 0,
        ..GenerateParams::default()
    };
    let err = p.validate().unwrap_err();
    assert!(matches!(err, KronkelError::InvalidConfiguration(_)));
    assert!(err.to_string().contains("width"));
}

#[test]
fn oversized_width_is_rejected() {
    let p = GenerateParams {
        desired_width: u32::MAX,
        ..GenerateParams::default()
    };
    assert!(p.columns().is_err());
    assert!(p.validate().is_err());
}

#[test]
fn width_is_capped() {
    let at_cap = GenerateParams {
        desired_width: MAX_WIDTH,
        ..GenerateParams::default()
    };
    at_cap.validate().unwrap();

    let over = GenerateParams {
        desired_width: MAX_WIDTH + 1,
        ..GenerateParams::default()
    };
    let err = over.validate().unwrap_err();
    assert!(matches!(err, KronkelError::InvalidConfiguration(_)));
    assert!(err.to_string().contains("8192"));
}

#[test]
fn non_positive_or_non_finite_sizes_are_rejected() {
    let base = GenerateParams::default();
    let bad = [
        GenerateParams { tile: 0.0, ..base },
        GenerateParams { tile: -8.0, ..base },
        GenerateParams {
            tile: f64::NAN,
            ..base
        },
        GenerateParams {
            margin: -1.0,
            ..base
        },
        GenerateParams {
            margin: f64::INFINITY,
            ..base
        },
        GenerateParams {
            line_width: 0.0,
            ..base
        },
    ];
    for p in bad {
        assert!(
            matches!(p.validate(), Err(KronkelError::InvalidConfiguration(_))),
            "{p:?}"
        );
    }
}

#[test]
fn zero_margin_is_allowed() {
    let p = GenerateParams {
        margin: 0.0,
        ..GenerateParams::default()
    };
    p.validate().unwrap();
}
