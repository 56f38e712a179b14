use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Template {
    Distill,
    SocialPost,
    Newsletter,
    Takeaways,
    ImageSuggestion,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::Distill,
        Template::SocialPost,
        Template::Newsletter,
        Template::Takeaways,
        Template::ImageSuggestion,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distill => "distill",
            Self::SocialPost => "social-post",
            Self::Newsletter => "newsletter",
            Self::Takeaways => "takeaways",
            Self::ImageSuggestion => "image-suggestion",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template: {0}")]
pub struct UnknownTemplate(pub String);

impl FromStr for Template {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_templates() {
        for template in Template::ALL {
            assert_eq!(template.as_str().parse::<Template>(), Ok(template));
        }
    }

    #[test]
    fn test_parse_unknown_template() {
        assert_eq!(
            "press-release".parse::<Template>(),
            Err(UnknownTemplate("press-release".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&Template::ImageSuggestion).unwrap();
        assert_eq!(json, r#""image-suggestion""#);
    }
}
