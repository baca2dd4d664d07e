use std::sync::LazyLock;

use crate::models::{BrandGlyph, Icon, IconCardDescriptor};

pub const LLM_MONITORING_SECTION: &str = "LLM Monitoring Integrations Section";
pub const LLM_MONITORING_VIEW_ALL: &str = "View all LLM Monitoring Integrations";
pub const LLM_MONITORING_GRID_COLS: &str =
    "grid-cols-2 sm:grid-cols-3 md:grid-cols-4 lg:grid-cols-4";

fn card(name: &str, href: &str, icon: Icon, click_name: &str) -> IconCardDescriptor {
    IconCardDescriptor::new(name, href, icon, click_name)
}

/// LLM and agent framework integrations, alphabetical.
pub static LLM_MONITORING_CARDS: LazyLock<Vec<IconCardDescriptor>> = LazyLock::new(|| {
    vec![
        card(
            "Amazon Bedrock",
            "/docs/amazon-bedrock-monitoring",
            Icon::glyph(BrandGlyph::AmazonWebServices),
            "Amazon Bedrock Monitoring",
        ),
        card(
            "Anthropic API",
            "/docs/anthropic-monitoring",
            Icon::glyph(BrandGlyph::Anthropic),
            "Anthropic API Monitoring",
        ),
        card(
            "AutoGen",
            "/docs/autogen-observability",
            Icon::image("/svgs/icons/LLMMonitoring/autogen-logo.webp", "AutoGen Icon"),
            "AutoGen Monitoring",
        ),
        card(
            "Azure OpenAI API",
            "/docs/azure-openai-monitoring",
            Icon::image("/svgs/icons/LLMMonitoring/azure-logo.webp", "Azure OpenAI Icon"),
            "Azure OpenAI API Monitoring",
        ),
        card(
            "Claude Code",
            "/docs/claude-code-monitoring",
            Icon::glyph(BrandGlyph::Claude),
            "Claude Code Monitoring",
        ),
        card(
            "Crew AI",
            "/docs/crewai-observability",
            Icon::image("/svgs/icons/LLMMonitoring/crewai-logo.svg", "Crew AI Icon"),
            "Crew AI Monitoring",
        ),
        card(
            "DeepSeek API",
            "/docs/deepseek-monitoring",
            Icon::image("/svgs/icons/LLMMonitoring/deepseek-icon.svg", "DeepSeek Icon"),
            "DeepSeek Monitoring",
        ),
        card(
            "Google Gemini",
            "/docs/google-gemini-monitoring",
            Icon::glyph(BrandGlyph::GoogleGemini),
            "Google Gemini Monitoring",
        ),
        card(
            "LangChain/LangGraph",
            "/docs/langchain-observability",
            Icon::glyph(BrandGlyph::Langchain),
            "LangChain Monitoring",
        ),
        card(
            "LiteLLM",
            "/docs/litellm-observability",
            Icon::image("/img/docs/llm/litellm/litellm-logo.webp", "LiteLLM Icon"),
            "LiteLLM Monitoring",
        ),
        card(
            "LiveKit",
            "/docs/livekit-observability",
            Icon::image("/img/docs/llm/livekit/livekit-icon.svg", "LiveKit Icon"),
            "LiveKit Monitoring",
        ),
        card(
            "LlamaIndex",
            "/docs/llamaindex-observability",
            Icon::image("/svgs/icons/LLMMonitoring/llamaindex-icon.svg", "LlamaIndex Icon"),
            "LlamaIndex Monitoring",
        ),
        card(
            "Mastra",
            "/docs/mastra-observability",
            Icon::image("/img/docs/llm/mastra/mastra-icon.webp", "Mastra Icon"),
            "Mastra Monitoring",
        ),
        card(
            "OpenAI",
            "/docs/openai-monitoring",
            Icon::glyph(BrandGlyph::Openai),
            "OpenAI Monitoring",
        ),
        card(
            "Pydantic AI",
            "/docs/pydantic-ai-observability",
            Icon::glyph(BrandGlyph::Pydantic),
            "Pydantic AI Monitoring",
        ),
        card(
            "Semantic Kernel",
            "/docs/semantic-kernel-observability",
            Icon::image("/img/docs/llm/semantic-kernel/sk-logo.webp", "Semantic Kernel Icon"),
            "Semantic Kernel Monitoring",
        ),
        card(
            "Vercel AI SDK",
            "/docs/vercel-ai-sdk-observability",
            Icon::glyph(BrandGlyph::Vercel),
            "Vercel AI SDK Monitoring",
        ),
    ]
});
