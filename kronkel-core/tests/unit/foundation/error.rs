use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        KronkelError::invalid_configuration("x")
            .to_string()
            .contains("invalid configuration:")
    );
    assert!(
        KronkelError::config("x")
            .to_string()
            .contains("config error:")
    );
    assert!(
        KronkelError::render("x")
            .to_string()
            .contains("render error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = KronkelError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_context_converts_with_question_mark() {
    fn open_missing() -> KronkelResult<()> {
        use anyhow::Context as _;
        std::fs::File::open("/definitely/not/here.json").context("open settings")?;
        Ok(())
    }

    let err = open_missing().unwrap_err();
    assert!(matches!(err, KronkelError::Other(_)));
    assert!(err.to_string().contains("open settings"));
}
