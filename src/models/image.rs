use serde::{Deserialize, Serialize};

/// Optional "Source: <link>" suffix of a figure caption.
///
/// A link without a label (or the reverse) has nothing to render, so the pair
/// only exists as a whole.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Attribution {
    #[default]
    None,
    Source { link: String, label: String },
}

impl Attribution {
    pub fn source(link: impl Into<String>, label: impl Into<String>) -> Self {
        Self::from_parts(Some(link.into()), Some(label.into()))
    }

    /// Builds an attribution from two independently optional fields.
    ///
    /// Missing or empty halves collapse to [`Attribution::None`].
    pub fn from_parts(link: Option<String>, label: Option<String>) -> Self {
        match (link, label) {
            (Some(link), Some(label)) if !link.is_empty() && !label.is_empty() => {
                Self::Source { link, label }
            }
            _ => Self::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ImageDescriptor {
    pub src: String,
    pub alt: String,
    pub caption: String,
    #[serde(default)]
    pub attribution: Attribution,
}

impl ImageDescriptor {
    pub fn new(
        src: impl Into<String>,
        alt: impl Into<String>,
        caption: impl Into<String>,
    ) -> Self {
        Self {
            src: src.into(),
            alt: alt.into(),
            caption: caption.into(),
            attribution: Attribution::None,
        }
    }

    pub fn with_source(self, link: impl Into<String>, label: impl Into<String>) -> Self {
        self.with_attribution(Attribution::source(link, label))
    }

    pub fn with_attribution(mut self, attribution: Attribution) -> Self {
        self.attribution = attribution;
        self
    }
}
