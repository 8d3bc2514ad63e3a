use async_trait::async_trait;

pub mod tavily;

pub use tavily::TavilyClient;

/// Maximum number of hits requested per query.
pub const MAX_RESULTS: usize = 5;
/// Snippets longer than this many characters are cut and marked with an ellipsis.
pub const SNIPPET_LIMIT: usize = 800;
pub const NO_RESULTS_SENTINEL: &str = "(no web resources found)";

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

impl SearchResult {
    pub fn new(title: Option<String>, url: Option<String>, content: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_else(|| "No title".to_string()),
            url: url.unwrap_or_default(),
            snippet: truncate_snippet(&content.unwrap_or_default()),
        }
    }
}

/// A finished lookup. An empty `Found` is "nothing matched"; `Failed` carries
/// the text shown in place of results.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(Vec<SearchResult>),
    Failed(String),
}

impl SearchOutcome {
    /// Renders the outcome as the context block handed to the completion call.
    pub fn into_context(self) -> String {
        match self {
            SearchOutcome::Found(results) if results.is_empty() => NO_RESULTS_SENTINEL.to_string(),
            SearchOutcome::Found(results) => format_results(&results),
            SearchOutcome::Failed(message) => message,
        }
    }
}

#[async_trait]
pub trait WebSearch: Send + Sync {
    async fn search(&self, query: &str) -> SearchOutcome;
}

pub fn truncate_snippet(content: &str) -> String {
    match content.char_indices().nth(SNIPPET_LIMIT) {
        Some((cut, _)) => format!("{}…", &content[..cut]),
        None => content.to_string(),
    }
}

pub fn format_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| format!("- {} ({})\n  {}", r.title, r.url, r.snippet))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_snippets_pass_through() {
        assert_eq!(truncate_snippet("props on"), "props on");
        let exact = "a".repeat(SNIPPET_LIMIT);
        assert_eq!(truncate_snippet(&exact), exact);
    }

    #[test]
    fn long_snippets_are_cut_on_char_boundaries() {
        let long = "é".repeat(SNIPPET_LIMIT + 10);
        let cut = truncate_snippet(&long);
        assert!(cut.ends_with('…'));
        assert_eq!(cut.chars().count(), SNIPPET_LIMIT + 1);
    }

    #[test]
    fn missing_fields_get_defaults() {
        let result = SearchResult::new(None, None, None);
        assert_eq!(result.title, "No title");
        assert_eq!(result.url, "");
        assert_eq!(result.snippet, "");
    }

    #[test]
    fn empty_results_render_the_sentinel() {
        assert_eq!(SearchOutcome::Found(vec![]).into_context(), NO_RESULTS_SENTINEL);
    }

    #[test]
    fn failures_render_verbatim() {
        let outcome = SearchOutcome::Failed("[Error calling Tavily search: boom]".to_string());
        assert_eq!(outcome.into_context(), "[Error calling Tavily search: boom]");
    }

    #[test]
    fn results_render_as_bulleted_block() {
        let results = vec![
            SearchResult::new(
                Some("Failsafe".into()),
                Some("https://betaflight.com/docs/failsafe".into()),
                Some("Stage 1 and stage 2".into()),
            ),
            SearchResult::new(Some("GPS Rescue".into()), Some("https://oscarliang.com/gps".into()), None),
        ];
        assert_eq!(
            SearchOutcome::Found(results).into_context(),
            "- Failsafe (https://betaflight.com/docs/failsafe)\n  Stage 1 and stage 2\n- GPS Rescue (https://oscarliang.com/gps)\n  "
        );
    }
}
