use leptos::prelude::*;

use super::IconCardGrid;
use crate::catalog::{
    LLM_MONITORING_CARDS, LLM_MONITORING_GRID_COLS, LLM_MONITORING_SECTION,
    LLM_MONITORING_VIEW_ALL,
};

#[component]
pub fn LlmMonitoringListicle() -> impl IntoView {
    view! {
        <IconCardGrid
            cards=LLM_MONITORING_CARDS.to_vec()
            section_name=LLM_MONITORING_SECTION
            view_all_text=LLM_MONITORING_VIEW_ALL
            grid_cols=LLM_MONITORING_GRID_COLS
        />
    }
}
