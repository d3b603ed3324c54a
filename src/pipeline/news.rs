use crate::constants::{NEWS_KEYWORDS, NO_NEWS_PLACEHOLDER};
use crate::types::RawFeedData;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Headline {
    pub title: String,
    pub url: String,
}

/// Scrolling list of disaster headlines for the sidebar
#[derive(Debug, Clone, Serialize)]
pub struct NewsTicker {
    pub headlines: Vec<Headline>,
    /// Shown instead of headlines when the news feed had nothing at all
    pub placeholder: Option<&'static str>,
}

/// Keep articles whose title mentions one of the disaster keywords and whose
/// link is plain `http` or `https`.
///
/// A failed fetch or an empty article list shows the placeholder; articles that
/// exist but all miss the keywords leave the ticker empty.
pub fn build_ticker(news: Option<&RawFeedData>) -> NewsTicker {
    let articles = news
        .and_then(|n| n["articles"].as_array())
        .filter(|a| !a.is_empty());

    let Some(articles) = articles else {
        return NewsTicker {
            headlines: Vec::new(),
            placeholder: Some(NO_NEWS_PLACEHOLDER),
        };
    };

    let headlines = articles
        .iter()
        .filter_map(|article| {
            let title = article["title"].as_str()?;
            let url = article["url"].as_str().filter(|u| is_web_link(u))?;
            let lower = title.to_lowercase();
            NEWS_KEYWORDS
                .iter()
                .any(|k| lower.contains(k))
                .then(|| Headline {
                    title: title.to_string(),
                    url: url.to_string(),
                })
        })
        .collect();

    NewsTicker {
        headlines,
        placeholder: None,
    }
}

fn is_web_link(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}
