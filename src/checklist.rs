//! Flattens Keep checkbox lists into Markdown task-list syntax.
//!
//! A generic HTML→Markdown renderer has no checkbox concept: an
//! `<li><input type="checkbox"/><span>Milk</span></li>` comes out as a bare
//! bullet with the label. Checkbox semantics are therefore resolved *before*
//! rendering, and each checkbox `<li>` is lifted out of its list into a
//! standalone paragraph so the renderer does not wrap the task line in a
//! second bullet.

use scraper::{ElementRef, Selector};

use crate::utils::stripped_text;

/// One checkbox entry found in a note's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub checked: bool,
    pub label: String,
}

impl ChecklistItem {
    /// The literal Markdown task-list line for this item.
    pub fn as_markdown(&self) -> String {
        let mark = if self.checked { 'x' } else { ' ' };
        format!("- [{}] {}", mark, self.label)
    }
}

/// A content subtree with checkbox list items replaced by placeholder
/// paragraphs, plus the items needed to fill the placeholders back in after
/// rendering.
#[derive(Debug)]
pub struct Normalized {
    pub html: String,
    pub items: Vec<ChecklistItem>,
}

impl Normalized {
    /// Splice the literal task-list lines into the rendered Markdown.
    ///
    /// Renderers escape Markdown-significant characters in text (`[` becomes
    /// `\[`), so the literal `- [x]` syntax cannot ride through rendering
    /// inside the paragraph itself. The paragraphs carry opaque tokens
    /// instead, resolved here.
    pub fn finish(&self, rendered: &str) -> String {
        let mut out = rendered.to_string();
        for (index, item) in self.items.iter().enumerate() {
            out = out.replacen(&placeholder(index), &item.as_markdown(), 1);
        }
        out
    }
}

fn placeholder(index: usize) -> String {
    format!("checklist-item-{index}-placeholder")
}

/// Replace every checkbox `<li>` under `container` with a placeholder
/// paragraph.
///
/// Pure over the parsed document: replacements are computed as a list of
/// (serialized list item, paragraph) substitutions and applied in one pass
/// over the serialized subtree, leaving the parsed tree untouched.
///
/// The checked state comes from the `checked` attribute; the label is the
/// trimmed text of the next sibling `span` of the checkbox control, or empty
/// if there is none.
pub fn normalize(container: ElementRef) -> Normalized {
    let list_items = Selector::parse("li").unwrap();
    let checkboxes = Selector::parse(r#"input[type="checkbox"]"#).unwrap();

    let mut html = container.html();
    let mut items = Vec::new();

    for li in container.select(&list_items) {
        let Some(checkbox) = li.select(&checkboxes).next() else {
            continue;
        };

        // A list item nested inside an already-replaced one is gone from the
        // serialized subtree; skip it.
        let li_html = li.html();
        if !html.contains(&li_html) {
            continue;
        }

        let label = checkbox
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|e| e.value().name() == "span")
            .map(|span| stripped_text(&span))
            .unwrap_or_default();

        let paragraph = format!("<p>{}</p>", placeholder(items.len()));
        html = html.replacen(&li_html, &paragraph, 1);
        items.push(ChecklistItem {
            checked: checkbox.value().attr("checked").is_some(),
            label,
        });
    }

    Normalized { html, items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn content_of(doc: &Html) -> ElementRef<'_> {
        let sel = Selector::parse("div").unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn replaces_checked_and_unchecked_items() {
        let doc = Html::parse_fragment(
            r#"<div><ul>
                <li><input type="checkbox" checked="checked"/><span>Milk</span></li>
                <li><input type="checkbox"/><span>Eggs</span></li>
            </ul></div>"#,
        );
        let normalized = normalize(content_of(&doc));

        assert_eq!(
            normalized.items,
            vec![
                ChecklistItem { checked: true, label: "Milk".into() },
                ChecklistItem { checked: false, label: "Eggs".into() },
            ]
        );
        assert!(normalized.html.contains("<p>checklist-item-0-placeholder</p>"));
        assert!(normalized.html.contains("<p>checklist-item-1-placeholder</p>"));
        assert!(!normalized.html.contains("<li>"));
    }

    #[test]
    fn leaves_plain_list_items_alone() {
        let doc = Html::parse_fragment("<div><ul><li>just a bullet</li></ul></div>");
        let normalized = normalize(content_of(&doc));
        assert!(normalized.items.is_empty());
        assert!(normalized.html.contains("just a bullet"));
        assert!(normalized.html.contains("<li>"));
    }

    #[test]
    fn missing_label_span_yields_empty_label() {
        let doc = Html::parse_fragment(
            r#"<div><ul><li><input type="checkbox"/></li></ul></div>"#,
        );
        let normalized = normalize(content_of(&doc));
        assert_eq!(normalized.items, vec![ChecklistItem { checked: false, label: String::new() }]);
    }

    #[test]
    fn label_skips_non_span_siblings() {
        let doc = Html::parse_fragment(
            r#"<div><ul><li><input type="checkbox"/> <b>not me</b><span> Bread </span></li></ul></div>"#,
        );
        let normalized = normalize(content_of(&doc));
        assert_eq!(normalized.items[0].label, "Bread");
    }

    #[test]
    fn identical_items_are_replaced_one_by_one() {
        let doc = Html::parse_fragment(
            r#"<div><ul>
                <li><input type="checkbox"/><span>Milk</span></li>
                <li><input type="checkbox"/><span>Milk</span></li>
            </ul></div>"#,
        );
        let normalized = normalize(content_of(&doc));
        assert_eq!(normalized.items.len(), 2);
        assert!(normalized.html.contains("checklist-item-0-placeholder"));
        assert!(normalized.html.contains("checklist-item-1-placeholder"));
    }

    #[test]
    fn finish_splices_literal_task_lines() {
        let normalized = Normalized {
            html: String::new(),
            items: vec![
                ChecklistItem { checked: true, label: "Milk".into() },
                ChecklistItem { checked: false, label: "Eggs".into() },
            ],
        };
        let rendered = "checklist-item-0-placeholder\n\nchecklist-item-1-placeholder";
        assert_eq!(normalized.finish(rendered), "- [x] Milk\n\n- [ ] Eggs");
    }

    #[test]
    fn markdown_line_formats() {
        let checked = ChecklistItem { checked: true, label: "Milk".into() };
        let unchecked = ChecklistItem { checked: false, label: String::new() };
        assert_eq!(checked.as_markdown(), "- [x] Milk");
        assert_eq!(unchecked.as_markdown(), "- [ ] ");
    }
}
