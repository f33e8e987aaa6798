use eyre::{Result, eyre};
use htmd::HtmlToMarkdown;
use htmd::options::{BulletListMarker, HeadingStyle, Options};
use scraper::ElementRef;

/// Concatenated text of an element's descendants, with each text fragment
/// trimmed and empty fragments dropped. This is how note titles and checkbox
/// labels are read out of the parsed document.
pub fn stripped_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Render an HTML fragment to Markdown with ATX headings (`#`) and `-` bullet
/// markers.
pub fn render_markdown(html: &str) -> Result<String> {
    let converter = HtmlToMarkdown::builder()
        .options(Options {
            heading_style: HeadingStyle::Atx,
            bullet_list_marker: BulletListMarker::Dash,
            ..Options::default()
        })
        .build();
    converter
        .convert(html)
        .map_err(|e| eyre!("markdown rendering failed: {e}"))
}
