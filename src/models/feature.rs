use serde::{Deserialize, Serialize};

use super::{Attribution, ImageDescriptor};

/// Screenshot shown on a feature card. Feature cards never carry attribution.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FeatureImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

impl From<FeatureImage> for ImageDescriptor {
    fn from(image: FeatureImage) -> Self {
        Self {
            src: image.src,
            alt: image.alt,
            caption: image.caption,
            attribution: Attribution::None,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    pub title: String,
    pub description: String,
    pub href: String,
    pub cta_label: String,
    pub image: FeatureImage,
}

impl FeatureDescriptor {
    pub fn key(&self) -> &str {
        &self.title
    }
}
