//! Placeholder colour substitution for SVG templates.

use crate::types::Colour;

/// Colour painted into every template where the state colour belongs.
pub const PLACEHOLDER: &str = "#ff0000";

/// A template with its placeholder colour replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colorized {
    pub source: String,
    /// Number of placeholder occurrences replaced. Zero means the output is
    /// an untinted copy of the template.
    pub replacements: usize,
}

impl Colorized {
    pub fn is_untinted(&self) -> bool {
        self.replacements == 0
    }
}

/// Replace every occurrence of [`PLACEHOLDER`] with `colour`.
///
/// Matching is literal and case-sensitive.
pub fn colorize(source: &str, colour: Colour) -> Colorized {
    let replacements = source.matches(PLACEHOLDER).count();
    let source = if replacements == 0 {
        source.to_string()
    } else {
        source.replace(PLACEHOLDER, &colour.to_string())
    };

    Colorized {
        source,
        replacements,
    }
}

/// Replace `{{ ROLE }}` tokens with lowercase hex colours.
///
/// Used for the palette swatch, whose template names palette roles directly.
pub fn fill_palette_tokens<'a>(
    source: &str,
    roles: impl IntoIterator<Item = (&'a str, Colour)>,
) -> String {
    roles.into_iter().fold(source.to_string(), |data, (role, colour)| {
        data.replace(&format!("{{{{ {} }}}}", role), &colour.to_lower_hex())
    })
}
