//! Expansion of a template into its per-state variants.

use crate::error::Result;
use crate::types::{State, StateColours, StateVariant, Template};

/// Map a template filename to its four state variants.
///
/// Variants come back in [`State::ALL`] order: `{name}.{ext}`,
/// `{name}_disabled.{ext}`, `{name}_focus.{ext}`, `{name}_pressed.{ext}`.
pub fn expand(filename: &str, colours: &StateColours) -> Result<Vec<StateVariant>> {
    let template = Template::parse(filename)?;

    Ok(State::ALL
        .iter()
        .map(|&state| StateVariant {
            state,
            filename: template.variant_filename(state),
            colour: colours.get(state),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;
    use crate::types::{Colour, Palette};
    use pretty_assertions::assert_eq;

    fn colours() -> StateColours {
        StateColours {
            normal: Colour::rgb(0x11, 0x11, 0x11),
            disabled: Colour::rgb(0x22, 0x22, 0x22),
            focus: Colour::rgb(0x33, 0x33, 0x33),
            pressed: Colour::rgb(0x44, 0x44, 0x44),
        }
    }

    #[test]
    fn test_expand_names_and_colours() {
        let variants = expand("icon.svg", &colours()).unwrap();

        let pairs: Vec<(String, String)> = variants
            .iter()
            .map(|v| (v.filename.clone(), v.colour.to_string()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("icon.svg".to_string(), "#111111".to_string()),
                ("icon_disabled.svg".to_string(), "#222222".to_string()),
                ("icon_focus.svg".to_string(), "#333333".to_string()),
                ("icon_pressed.svg".to_string(), "#444444".to_string()),
            ]
        );
    }

    #[test]
    fn test_expand_always_four_unique() {
        let dark = StateColours::resolve(&Palette::dark()).unwrap();

        for name in ["a.svg", "branch_closed.svg", "x.png"] {
            let variants = expand(name, &dark).unwrap();
            assert_eq!(variants.len(), 4);

            let mut filenames: Vec<&str> = variants.iter().map(|v| v.filename.as_str()).collect();
            filenames.sort();
            filenames.dedup();
            assert_eq!(filenames.len(), 4);
        }
    }

    #[test]
    fn test_expand_invalid_filename() {
        let err = expand("archive.tar.svg", &colours()).unwrap_err();
        assert!(matches!(err, IconError::InvalidFilenameFormat { filename } if filename == "archive.tar.svg"));
    }
}
