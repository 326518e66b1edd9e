use super::*;

#[test]
fn default_is_four_random_colors() {
    let spec = PaletteSpec::default();
    assert_eq!(spec.len(), DEFAULT_PALETTE_LEN);
    assert_eq!(spec.resolve().unwrap().len(), 4);
}

#[test]
fn seeded_palettes_are_reproducible() {
    let spec = PaletteSpec::Random {
        count: 4,
        seed: Some(7),
    };
    assert_eq!(spec.resolve().unwrap(), spec.resolve().unwrap());

    let other = PaletteSpec::Random {
        count: 4,
        seed: Some(8),
    };
    assert_ne!(spec.resolve().unwrap(), other.resolve().unwrap());
}

#[test]
fn fixed_palette_is_returned_verbatim() {
    let colors = vec![Rgb8::new(1, 2, 3), Rgb8::WHITE];
    let spec = PaletteSpec::Fixed {
        colors: colors.clone(),
    };
    assert_eq!(spec.resolve().unwrap(), colors);
}

#[test]
fn empty_palettes_are_rejected() {
    assert!(
        PaletteSpec::Random {
            count: 0,
            seed: None
        }
        .resolve()
        .is_err()
    );
    assert!(PaletteSpec::Fixed { colors: vec![] }.resolve().is_err());
}

#[test]
fn json_shape_is_tagged() {
    let spec: PaletteSpec =
        serde_json::from_str(r#"{"kind":"random","count":3,"seed":11}"#).unwrap();
    assert_eq!(
        spec,
        PaletteSpec::Random {
            count: 3,
            seed: Some(11)
        }
    );

    let spec: PaletteSpec =
        serde_json::from_str(r#"{"kind":"fixed","colors":[{"r":1,"g":2,"b":3}]}"#).unwrap();
    assert_eq!(spec.len(), 1);
}

#[test]
fn oversized_palettes_are_rejected_before_drawing() {
    let huge = PaletteSpec::Random {
        count: usize::MAX,
        seed: Some(1),
    };
    let err = huge.resolve().unwrap_err();
    assert!(matches!(err, TumbleError::Validation(_)));

    let at_cap = PaletteSpec::Random {
        count: MAX_PALETTE_LEN,
        seed: Some(1),
    };
    assert_eq!(at_cap.resolve().unwrap().len(), MAX_PALETTE_LEN);

    let fixed = PaletteSpec::Fixed {
        colors: vec![Rgb8::BLACK; MAX_PALETTE_LEN + 1],
    };
    assert!(fixed.validate().is_err());
}
