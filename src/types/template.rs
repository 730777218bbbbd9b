//! Templates, interaction states and output sizes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{IconError, Result};

use super::Colour;

/// Interaction state an icon variant is painted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Normal,
    Disabled,
    Focus,
    Pressed,
}

impl State {
    /// Every state, in output order.
    pub const ALL: [State; 4] = [State::Normal, State::Disabled, State::Focus, State::Pressed];

    /// Filename suffix inserted before the extension.
    pub fn suffix(self) -> &'static str {
        match self {
            State::Normal => "",
            State::Disabled => "_disabled",
            State::Focus => "_focus",
            State::Pressed => "_pressed",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::Normal => "normal",
            State::Disabled => "disabled",
            State::Focus => "focus",
            State::Pressed => "pressed",
        };
        f.write_str(name)
    }
}

/// A vector icon template, e.g. `arrow_down.svg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    pub ext: String,
}

impl Template {
    /// Split a template filename into name and extension.
    ///
    /// The filename must contain exactly one `.` with text on both sides.
    pub fn parse(filename: &str) -> Result<Self> {
        let invalid = || IconError::InvalidFilenameFormat {
            filename: filename.to_string(),
        };

        let (name, ext) = filename.split_once('.').ok_or_else(invalid)?;
        if name.is_empty() || ext.is_empty() || ext.contains('.') {
            return Err(invalid());
        }

        Ok(Self {
            name: name.to_string(),
            ext: ext.to_string(),
        })
    }

    /// Base name used for blacklist checks: everything before the first `.`.
    pub fn base_name(filename: &str) -> &str {
        filename.split('.').next().unwrap_or(filename)
    }

    /// Filename of the variant for `state`, keeping the template extension.
    pub fn variant_filename(&self, state: State) -> String {
        format!("{}{}.{}", self.name, state.suffix(), self.ext)
    }
}

/// One colour variant of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateVariant {
    pub state: State,
    /// Variant filename, e.g. `arrow_down_focus.svg`
    pub filename: String,
    pub colour: Colour,
}

impl StateVariant {
    /// Variant filename without its extension.
    pub fn stem(&self) -> &str {
        self.filename
            .rsplit_once('.')
            .map_or(self.filename.as_str(), |(stem, _)| stem)
    }

    /// Output filename for a raster size, e.g. `arrow_down_focus@2x.png`.
    pub fn output_filename(&self, size: &SizeSpec) -> String {
        format!("{}{}", self.stem(), size.suffix)
    }
}

/// A square raster size and the filename suffix its assets carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeSpec {
    /// Height and width in pixels
    pub size: u32,
    /// Replaces the template extension, e.g. `.png` or `@2x.png`
    pub suffix: String,
}

impl SizeSpec {
    pub fn new(size: u32, suffix: impl Into<String>) -> Self {
        Self {
            size,
            suffix: suffix.into(),
        }
    }

    /// The base size followed by its double-density counterpart.
    pub fn defaults() -> Vec<Self> {
        vec![Self::new(32, ".png"), Self::new(64, "@2x.png")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_template() {
        let t = Template::parse("arrow_down.svg").unwrap();
        assert_eq!(t.name, "arrow_down");
        assert_eq!(t.ext, "svg");
    }

    #[test]
    fn test_parse_rejects_bad_filenames() {
        for name in ["noext", "two.dots.svg", ".svg", "icon."] {
            assert!(
                matches!(
                    Template::parse(name),
                    Err(IconError::InvalidFilenameFormat { .. })
                ),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn test_base_name() {
        assert_eq!(Template::base_name("base_palette.svg"), "base_palette");
        assert_eq!(Template::base_name("a.b.svg"), "a");
        assert_eq!(Template::base_name("plain"), "plain");
    }

    #[test]
    fn test_output_filename() {
        let variant = StateVariant {
            state: State::Focus,
            filename: "checkbox_focus.svg".to_string(),
            colour: Colour::rgb(0, 0, 0),
        };

        assert_eq!(variant.stem(), "checkbox_focus");
        assert_eq!(variant.output_filename(&SizeSpec::new(32, ".png")), "checkbox_focus.png");
        assert_eq!(
            variant.output_filename(&SizeSpec::new(64, "@2x.png")),
            "checkbox_focus@2x.png"
        );
    }

    #[test]
    fn test_default_sizes() {
        let sizes = SizeSpec::defaults();
        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes[0], SizeSpec::new(32, ".png"));
        assert_ne!(sizes[0].suffix, sizes[1].suffix);
    }
}
