use super::Template;
use serde::Serialize;

/// Sampling parameters forwarded to the completion service. `None` leaves the
/// provider default in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct SamplingParams {
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
}

impl SamplingParams {
    pub const fn provider_defaults() -> Self {
        Self {
            temperature: None,
            top_p: None,
        }
    }

    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub const fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }
}

/// One logical endpoint: the route it is served on and how the pipeline is
/// parameterized for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    pub name: &'static str,
    pub path: &'static str,
    pub template: Template,
    pub sampling: SamplingParams,
    pub structured: bool,
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        name: "generate",
        path: "/api/generate",
        template: Template::Distill,
        sampling: SamplingParams::provider_defaults(),
        structured: false,
    },
    Endpoint {
        name: "post",
        path: "/api/post",
        template: Template::SocialPost,
        sampling: SamplingParams::provider_defaults()
            .with_temperature(1.0)
            .with_top_p(1.0),
        structured: false,
    },
    Endpoint {
        name: "newsletter",
        path: "/api/newsletter",
        template: Template::Newsletter,
        sampling: SamplingParams::provider_defaults().with_temperature(0.7),
        structured: true,
    },
    Endpoint {
        name: "takeaways",
        path: "/api/takeaways",
        template: Template::Takeaways,
        sampling: SamplingParams::provider_defaults().with_temperature(0.5),
        structured: false,
    },
    Endpoint {
        name: "image",
        path: "/api/image",
        template: Template::ImageSuggestion,
        sampling: SamplingParams::provider_defaults(),
        structured: false,
    },
];

#[cfg(test)]
pub(crate) fn find_endpoint(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<_> = ENDPOINTS.iter().map(|e| e.path).collect();
        assert_eq!(paths.len(), ENDPOINTS.len());
    }

    #[test]
    fn test_only_newsletter_is_structured() {
        let structured: Vec<_> = ENDPOINTS
            .iter()
            .filter(|e| e.structured)
            .map(|e| e.template)
            .collect();
        assert_eq!(structured, vec![Template::Newsletter]);
    }

    #[test]
    fn test_find_endpoint() {
        let post = find_endpoint("post").unwrap();
        assert_eq!(post.sampling.temperature, Some(1.0));
        assert_eq!(post.sampling.top_p, Some(1.0));
        assert!(find_endpoint("missing").is_none());
    }
}
