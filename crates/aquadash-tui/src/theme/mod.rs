//! Theme: palette, semantic styles, and the icon set.

pub mod icons;
pub mod palette;
pub mod styles;

pub use icons::IconSet;
