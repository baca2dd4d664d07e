use serde::{Deserialize, Serialize};

/// Vector brand marks available in the icon sprite.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrandGlyph {
    AmazonWebServices,
    Anthropic,
    Claude,
    GoogleGemini,
    Langchain,
    Openai,
    Pydantic,
    Vercel,
}

impl BrandGlyph {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AmazonWebServices => "amazon-web-services",
            Self::Anthropic => "anthropic",
            Self::Claude => "claude",
            Self::GoogleGemini => "google-gemini",
            Self::Langchain => "langchain",
            Self::Openai => "openai",
            Self::Pydantic => "pydantic",
            Self::Vercel => "vercel",
        }
    }

    /// Human readable name, used as the accessible label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AmazonWebServices => "Amazon Web Services",
            Self::Anthropic => "Anthropic",
            Self::Claude => "Claude",
            Self::GoogleGemini => "Google Gemini",
            Self::Langchain => "LangChain",
            Self::Openai => "OpenAI",
            Self::Pydantic => "Pydantic",
            Self::Vercel => "Vercel",
        }
    }

    /// Text colour applied to the glyph.
    pub fn tone_class(&self) -> &'static str {
        match self {
            Self::Anthropic | Self::Claude => "text-orange-500",
            Self::GoogleGemini => "text-blue-500",
            Self::Openai => "text-green-400",
            Self::Pydantic => "text-pink-600",
            Self::AmazonWebServices | Self::Langchain | Self::Vercel => "text-white",
        }
    }
}

impl std::fmt::Display for BrandGlyph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BrandGlyph {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "amazon-web-services" => Ok(Self::AmazonWebServices),
            "anthropic" => Ok(Self::Anthropic),
            "claude" => Ok(Self::Claude),
            "google-gemini" => Ok(Self::GoogleGemini),
            "langchain" => Ok(Self::Langchain),
            "openai" => Ok(Self::Openai),
            "pydantic" => Ok(Self::Pydantic),
            "vercel" => Ok(Self::Vercel),
            _ => Err(format!("invalid brand glyph: {}", s)),
        }
    }
}
