//! Serves the embedded browser UI.
//!
//! The page is compiled into the binary — no build step, no assets on disk.
//! Replies from the API are displayed as returned; nothing is parsed or
//! transformed client-side beyond whitespace-preserving layout.

use axum::extract::State;
use axum::response::Html;

use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../assets/index.html");

/// GET /
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    Html(INDEX_HTML.replace("{app_title}", &state.config.app_title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_has_title_placeholder_and_both_tabs() {
        assert!(INDEX_HTML.contains("{app_title}"));
        assert!(INDEX_HTML.contains("Generate Questions"));
        assert!(INDEX_HTML.contains("Practice &amp; Feedback"));
    }

    #[test]
    fn test_voice_mode_is_labeled_not_implemented() {
        assert!(INDEX_HTML.contains("not implemented"));
    }
}
