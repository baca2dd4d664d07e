use leptos::prelude::*;

use crate::models::{FeatureDescriptor, IconCardDescriptor};

/// Lists the product features shown in the carousel, in display order.
#[server(ListFeatures, "/api")]
pub async fn list_features() -> Result<Vec<FeatureDescriptor>, ServerFnError> {
    let features = crate::catalog::FEATURES.to_vec();
    log::debug!("list_features: {} entries", features.len());
    Ok(features)
}

/// Lists the LLM monitoring integration cards, in display order.
#[server(ListIntegrations, "/api")]
pub async fn list_integrations() -> Result<Vec<IconCardDescriptor>, ServerFnError> {
    let cards = crate::catalog::LLM_MONITORING_CARDS.to_vec();
    log::debug!("list_integrations: {} entries", cards.len());
    Ok(cards)
}
