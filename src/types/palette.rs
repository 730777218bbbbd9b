//! Palette type for named colour roles.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{IconError, Result};

use super::{Colour, State};

/// Role used for the normal (enabled, idle) icon state.
pub const ROLE_NORMAL: &str = "COLOR_FOREGROUND_DARK";
/// Role used for the disabled icon state.
pub const ROLE_DISABLED: &str = "COLOR_BACKGROUND_NORMAL";
/// Role used for the focus icon state.
pub const ROLE_FOCUS: &str = "COLOR_SELECTION_LIGHT";
/// Role used for the pressed icon state.
pub const ROLE_PRESSED: &str = "COLOR_SELECTION_NORMAL";

/// A named collection of colour roles.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Palette {
    /// Palette name
    pub name: String,

    /// Colour roles, e.g. `COLOR_SELECTION_LIGHT -> #148CD2`
    #[serde(rename = "colors")]
    colours: BTreeMap<String, Colour>,
}

impl Palette {
    /// Create a new empty palette.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colours: BTreeMap::new(),
        }
    }

    /// Add a colour role, replacing any previous value.
    pub fn with(mut self, role: impl Into<String>, colour: Colour) -> Self {
        self.colours.insert(role.into(), colour);
        self
    }

    /// The builtin dark palette.
    pub fn dark() -> Self {
        Self::new("dark")
            .with("COLOR_BACKGROUND_LIGHT", Colour::rgb(0x50, 0x5F, 0x69))
            .with("COLOR_BACKGROUND_NORMAL", Colour::rgb(0x32, 0x41, 0x4B))
            .with("COLOR_BACKGROUND_DARK", Colour::rgb(0x19, 0x23, 0x2D))
            .with("COLOR_FOREGROUND_LIGHT", Colour::rgb(0xF0, 0xF0, 0xF0))
            .with("COLOR_FOREGROUND_NORMAL", Colour::rgb(0xAA, 0xAA, 0xAA))
            .with("COLOR_FOREGROUND_DARK", Colour::rgb(0x78, 0x78, 0x78))
            .with("COLOR_SELECTION_LIGHT", Colour::rgb(0x14, 0x8C, 0xD2))
            .with("COLOR_SELECTION_NORMAL", Colour::rgb(0x14, 0x64, 0xA0))
            .with("COLOR_SELECTION_DARK", Colour::rgb(0x14, 0x50, 0x6E))
    }

    /// Look up a builtin palette by name.
    pub fn builtin(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }

    /// Resolve a palette selection: a builtin name or a path to a YAML file.
    pub fn load(selection: &str) -> Result<Self> {
        if let Some(palette) = Self::builtin(selection) {
            return Ok(palette);
        }

        let path = Path::new(selection);
        if !path.exists() {
            return Err(IconError::Config {
                message: format!("Palette not found: {}", selection),
                help: Some("Use 'dark' for the builtin palette or provide a YAML file".to_string()),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read palette: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a palette from YAML (`name:` plus a `colors:` map).
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| IconError::Parse {
            message: format!("Invalid palette: {}", e),
            help: Some("Expected `name:` and a `colors:` map of ROLE: \"#RRGGBB\"".to_string()),
        })
    }

    /// Get a colour by role name.
    pub fn get(&self, role: &str) -> Option<Colour> {
        self.colours.get(role).copied()
    }

    /// Iterate over roles and colours in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Colour)> {
        self.colours.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

/// The four colours an icon is painted with, one per interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateColours {
    pub normal: Colour,
    pub disabled: Colour,
    pub focus: Colour,
    pub pressed: Colour,
}

impl StateColours {
    /// Pull the state colours out of a palette.
    ///
    /// Fails with `MissingPaletteField` naming the first absent role.
    pub fn resolve(palette: &Palette) -> Result<Self> {
        let role = |field: &str| {
            palette
                .get(field)
                .ok_or_else(|| IconError::MissingPaletteField {
                    palette: palette.name.clone(),
                    field: field.to_string(),
                })
        };

        Ok(Self {
            normal: role(ROLE_NORMAL)?,
            disabled: role(ROLE_DISABLED)?,
            focus: role(ROLE_FOCUS)?,
            pressed: role(ROLE_PRESSED)?,
        })
    }

    /// Colour for a given state.
    pub fn get(&self, state: State) -> Colour {
        match state {
            State::Normal => self.normal,
            State::Disabled => self.disabled,
            State::Focus => self.focus,
            State::Pressed => self.pressed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_palette_state_colours() {
        let colours = StateColours::resolve(&Palette::dark()).unwrap();

        assert_eq!(colours.normal.to_string(), "#787878");
        assert_eq!(colours.disabled.to_string(), "#32414B");
        assert_eq!(colours.focus.to_string(), "#148CD2");
        assert_eq!(colours.pressed.to_string(), "#1464A0");
    }

    #[test]
    fn test_resolve_missing_field() {
        let palette = Palette::new("partial")
            .with(ROLE_NORMAL, Colour::rgb(1, 1, 1))
            .with(ROLE_DISABLED, Colour::rgb(2, 2, 2))
            .with(ROLE_FOCUS, Colour::rgb(3, 3, 3));

        let err = StateColours::resolve(&palette).unwrap_err();
        match err {
            IconError::MissingPaletteField { palette, field } => {
                assert_eq!(palette, "partial");
                assert_eq!(field, ROLE_PRESSED);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_state_lookup() {
        let colours = StateColours::resolve(&Palette::dark()).unwrap();
        assert_eq!(colours.get(State::Focus), colours.focus);
        assert_eq!(colours.get(State::Normal), colours.normal);
    }

    #[test]
    fn test_parse_yaml_palette() {
        let palette = Palette::parse(
            r##"
name: custom
colors:
  COLOR_FOREGROUND_DARK: "#111111"
  COLOR_BACKGROUND_NORMAL: "#222222"
  COLOR_SELECTION_LIGHT: "#333333"
  COLOR_SELECTION_NORMAL: "#444444"
"##,
        )
        .unwrap();

        assert_eq!(palette.name, "custom");
        assert_eq!(palette.len(), 4);
        let colours = StateColours::resolve(&palette).unwrap();
        assert_eq!(colours.pressed, Colour::rgb(0x44, 0x44, 0x44));
    }

    #[test]
    fn test_parse_rejects_bad_colour() {
        let result = Palette::parse("name: bad\ncolors:\n  COLOR_FOREGROUND_DARK: \"#zzz\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_unknown_palette() {
        assert!(matches!(
            Palette::load("no-such-palette"),
            Err(IconError::Config { .. })
        ));
    }

    #[test]
    fn test_iter_is_name_ordered() {
        let dark = Palette::dark();
        let names: Vec<&str> = dark.iter().map(|(n, _)| n).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
