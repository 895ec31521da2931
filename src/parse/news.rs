use crate::models::NewsArticle;

/// Splits a completion into articles on blank-line boundaries.
///
/// The first line of each block becomes the title, the second the
/// description; blocks with fewer than two lines are skipped. The model
/// does not return real links, so every article gets a placeholder url.
pub fn news_articles(text: &str) -> Vec<NewsArticle> {
    text.split("\n\n")
        .filter_map(|block| {
            let mut lines = block.lines();
            let title = lines.next()?;
            let description = lines.next()?;
            Some(NewsArticle {
                title: title.to_string(),
                description: description.to_string(),
                url: "#".to_string(),
            })
        })
        .collect()
}
