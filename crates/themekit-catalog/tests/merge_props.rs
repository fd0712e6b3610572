//! Property tests for the field-by-field dark override merge.

use proptest::prelude::*;
use themekit_catalog::{ColorField, ColorOverride, TextOverride, ThemeCatalog};

fn color() -> impl Strategy<Value = String> {
    "#[0-9A-F]{6}"
}

fn maybe_color() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(color())
}

fn text_override() -> impl Strategy<Value = Option<TextOverride>> {
    proptest::option::of((maybe_color(), maybe_color(), maybe_color()).prop_map(
        |(primary, secondary, accent)| TextOverride {
            primary,
            secondary,
            accent,
        },
    ))
}

prop_compose! {
    fn color_override()(
        head in (maybe_color(), maybe_color(), maybe_color(), maybe_color()),
        text in text_override(),
        tail in (maybe_color(), maybe_color(), maybe_color(), maybe_color(), maybe_color()),
    ) -> ColorOverride {
        let (primary, secondary, background, surface) = head;
        let (border, success, warning, error, shadow) = tail;
        ColorOverride {
            primary,
            secondary,
            background,
            surface,
            text,
            border,
            success,
            warning,
            error,
            shadow,
        }
    }
}

proptest! {
    #[test]
    fn override_fields_win_and_others_fall_back(
        index in 0usize..13,
        dark in color_override(),
    ) {
        let catalog = ThemeCatalog::builtin();
        let base = &catalog.themes()[index].light;
        let merged = base.with_override(&dark);

        for field in ColorField::ALL {
            match dark.get(field) {
                Some(expected) => prop_assert_eq!(merged.get(field), expected),
                None => prop_assert_eq!(merged.get(field), base.get(field)),
            }
        }
    }

    #[test]
    fn merge_is_idempotent(dark in color_override()) {
        let catalog = ThemeCatalog::builtin();
        let base = &catalog.themes()[0].light;
        let once = base.with_override(&dark);
        let twice = once.with_override(&dark);
        prop_assert_eq!(once, twice);
    }
}
