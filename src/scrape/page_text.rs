use scraper::Html;

const SKIPPED_ELEMENTS: [&str; 3] = ["script", "style", "noscript"];

/// Human-visible text of an HTML document: every text node outside
/// script, style and noscript, joined with single spaces.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut chunks: Vec<&str> = Vec::new();
    for node in document.tree.nodes() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .map(|element| SKIPPED_ELEMENTS.contains(&element.name()))
                .unwrap_or(false)
        });
        if !hidden {
            chunks.push(text);
        }
    }

    chunks
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
