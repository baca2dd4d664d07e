pub use brand_glyph::*;
pub use feature::*;
pub use icon_card::*;
pub use image::*;

mod brand_glyph;
mod feature;
mod icon_card;
mod image;
