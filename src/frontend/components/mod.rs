//! Reusable UI components for the site

mod feature_card;
mod feature_showcase;
mod figure;
mod footer;
mod icon_card_grid;
mod icons;
mod llm_monitoring;
mod nav;

pub use feature_card::FeatureCard;
pub use feature_showcase::{FeatureShowcase, ProductFeatureShowcase};
pub use figure::Figure;
pub use footer::Footer;
pub use icon_card_grid::{IconCard, IconCardGrid, DEFAULT_GRID_COLS, DEFAULT_VIEW_ALL_HREF};
pub use icons::{ArrowRight, BrandMark, CardIcon, BRAND_SPRITE};
pub use llm_monitoring::LlmMonitoringListicle;
pub use nav::Nav;
