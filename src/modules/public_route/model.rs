use edudash_models::FormId;
use url::{Url, form_urlencoded};

/// Query parameters the app was launched with.
///
/// Parsed once at startup. The only mutation is [`clear`](Self::clear), used
/// when the public form is closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationContext {
    params: Vec<(String, String)>,
}

impl NavigationContext {
    /// Accepts a full URL (`https://host/?view=feedback&id=abc`) or a bare
    /// query string, with or without the leading `?`.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let params = match Url::parse(input) {
            Ok(url) => url.query_pairs().into_owned().collect(),
            Err(_) => {
                let query = input.strip_prefix('?').unwrap_or(input);
                form_urlencoded::parse(query.as_bytes()).into_owned().collect()
            }
        };
        Self { params }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            params: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn clear(&mut self) {
        self.params.clear();
    }

    pub fn request(&self) -> PublicRouteRequest {
        PublicRouteRequest {
            view: self.get("view").map(str::to_owned),
            id: self.get("id").map(str::to_owned),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicRouteRequest {
    pub view: Option<String>,
    pub id: Option<String>,
}

/// A route that renders without a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublicRoute {
    FeedbackForm { form_id: FormId },
}

impl PublicRoute {
    pub const FEEDBACK_VIEW: &'static str = "feedback";

    /// Active only for `view=feedback` with a non-blank `id`.
    pub fn detect(context: &NavigationContext) -> Option<Self> {
        let request = context.request();
        if request.view.as_deref() != Some(Self::FEEDBACK_VIEW) {
            return None;
        }
        let id = request.id?;
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        Some(Self::FeedbackForm {
            form_id: FormId::new(id),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_query() {
        let ctx = NavigationContext::parse("?view=feedback&id=abc123");
        assert_eq!(ctx.get("view"), Some("feedback"));
        assert_eq!(ctx.get("id"), Some("abc123"));
        assert_eq!(ctx, NavigationContext::parse("view=feedback&id=abc123"));
    }

    #[test]
    fn test_parse_full_url() {
        let ctx = NavigationContext::parse("https://school.example/app?view=feedback&id=f%2042");
        assert_eq!(ctx.get("id"), Some("f 42"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let ctx = NavigationContext::parse("id=first&id=second");
        assert_eq!(ctx.get("id"), Some("first"));
    }

    #[test]
    fn test_detect_feedback_route() {
        let ctx = NavigationContext::parse("?view=feedback&id=abc123");
        assert_eq!(
            PublicRoute::detect(&ctx),
            Some(PublicRoute::FeedbackForm {
                form_id: "abc123".into()
            })
        );
    }

    #[test]
    fn test_detect_requires_view_and_id() {
        for query in [
            "",
            "?view=feedback",
            "?view=feedback&id=",
            "?view=feedback&id=%20%20",
            "?id=abc123",
            "?view=grades&id=abc123",
            "?view=Feedback&id=abc123",
        ] {
            assert_eq!(PublicRoute::detect(&NavigationContext::parse(query)), None, "{query}");
        }
    }

    #[test]
    fn test_clear_disables_route() {
        let mut ctx = NavigationContext::from_pairs([("view", "feedback"), ("id", "abc123")]);
        assert!(PublicRoute::detect(&ctx).is_some());
        ctx.clear();
        assert!(ctx.is_empty());
        assert!(PublicRoute::detect(&ctx).is_none());
    }
}
