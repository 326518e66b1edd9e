use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        TumbleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(TumbleError::render("x").to_string().contains("render error:"));
    assert!(TumbleError::encode("x").to_string().contains("encode error:"));
    assert!(
        TumbleError::publish("x")
            .to_string()
            .contains("publish error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = TumbleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn anyhow_context_converts_with_question_mark() {
    fn fails() -> TumbleResult<()> {
        use anyhow::Context as _;
        std::fs::read("/definitely/not/here/tumble.bin").context("read fixture")?;
        Ok(())
    }

    let err = fails().unwrap_err();
    assert!(matches!(err, TumbleError::Other(_)));
    assert!(err.to_string().contains("read fixture"));
}
