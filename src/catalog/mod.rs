//! Static content tables rendered by the site components.

mod features;
mod llm_monitoring;

pub use features::FEATURES;
pub use llm_monitoring::{
    LLM_MONITORING_CARDS, LLM_MONITORING_GRID_COLS, LLM_MONITORING_SECTION,
    LLM_MONITORING_VIEW_ALL,
};

use std::collections::HashSet;

use crate::common::CatalogError;
use crate::models::{FeatureDescriptor, Icon, IconCardDescriptor};

pub fn validate_features(features: &[FeatureDescriptor]) -> Result<(), CatalogError> {
    const TABLE: &str = "features";

    let mut seen = HashSet::new();
    for feature in features {
        let key = feature.key();
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateKey {
                table: TABLE,
                key: key.to_string(),
            });
        }
        require(TABLE, key, "image src", &feature.image.src)?;
        require(TABLE, key, "image alt", &feature.image.alt)?;
    }
    Ok(())
}

pub fn validate_icon_cards(cards: &[IconCardDescriptor]) -> Result<(), CatalogError> {
    const TABLE: &str = "icon cards";

    let mut seen = HashSet::new();
    for card in cards {
        let key = card.key();
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateKey {
                table: TABLE,
                key: key.to_string(),
            });
        }
        if let Icon::Image { src, alt } = &card.icon {
            require(TABLE, key, "icon src", src)?;
            require(TABLE, key, "icon alt", alt)?;
        }
    }
    Ok(())
}

/// Checks every built-in table. Called once at startup.
pub fn validate_catalog() -> Result<(), CatalogError> {
    validate_features(&FEATURES)?;
    validate_icon_cards(&LLM_MONITORING_CARDS)?;
    Ok(())
}

fn require(
    table: &'static str,
    key: &str,
    field: &'static str,
    value: &str,
) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::EmptyField {
            table,
            key: key.to_string(),
            field,
        });
    }
    Ok(())
}
