use serde::{Deserialize, Serialize};

use super::BrandGlyph;

/// What sits in the icon slot of a card: a sprite glyph or a plain image.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Icon {
    Glyph { glyph: BrandGlyph },
    Image { src: String, alt: String },
}

impl Icon {
    pub fn glyph(glyph: BrandGlyph) -> Self {
        Self::Glyph { glyph }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct IconCardDescriptor {
    pub name: String,
    pub href: String,
    pub icon: Icon,
    /// Label attached to the card for analytics.
    pub click_name: String,
}

impl IconCardDescriptor {
    pub fn new(
        name: impl Into<String>,
        href: impl Into<String>,
        icon: Icon,
        click_name: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            icon,
            click_name: click_name.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.name
    }
}
