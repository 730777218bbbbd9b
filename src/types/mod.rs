mod colour;
mod palette;
mod template;

pub use colour::Colour;
pub use palette::{
    Palette, StateColours, ROLE_DISABLED, ROLE_FOCUS, ROLE_NORMAL, ROLE_PRESSED,
};
pub use template::{SizeSpec, State, StateVariant, Template};
