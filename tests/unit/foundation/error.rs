use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(SegueError::ease("x").to_string().contains("ease error:"));
    assert!(
        SegueError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        SegueError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SegueError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
