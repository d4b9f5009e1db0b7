//! Queries over rendered HTML for unit tests.
//!
//! Only understands the markup this crate renders: double-quoted attribute
//! values and no raw `>` inside tags.

use regex::Regex;
use std::sync::OnceLock;

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

static OPEN_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static ATTR_REGEX: OnceLock<Regex> = OnceLock::new();
static ANY_TAG_REGEX: OnceLock<Regex> = OnceLock::new();

/// One element of a rendered document.
#[derive(Debug, Clone)]
pub struct Tag {
    pub name: String,
    attrs: Vec<(String, String)>,
    /// Raw markup between the opening and closing tag
    pub inner: String,
}

impl Tag {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn classes(&self) -> Vec<&str> {
        self.attr("class")
            .map(|class| class.split_whitespace().collect())
            .unwrap_or_default()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }

    pub fn delay_ms(&self) -> Option<u32> {
        self.attr("data-delay-ms").and_then(|v| v.parse().ok())
    }

    /// Text content with tags removed and surrounding whitespace trimmed.
    pub fn text(&self) -> String {
        text_content(&self.inner)
    }
}

/// Every element in document order.
pub fn elements(html: &str) -> Vec<Tag> {
    let open = OPEN_TAG_REGEX.get_or_init(|| {
        Regex::new(r#"<([a-zA-Z][a-zA-Z0-9]*)((?:\s+[^\s=>/]+(?:="[^"]*")?)*)\s*/?>"#).unwrap()
    });
    let attr = ATTR_REGEX.get_or_init(|| Regex::new(r#"([^\s=]+)(?:="([^"]*)")?"#).unwrap());

    open.captures_iter(html)
        .map(|cap| {
            let name = cap[1].to_ascii_lowercase();
            let attrs = attr
                .captures_iter(&cap[2])
                .map(|a| {
                    let value = a.get(2).map_or("", |m| m.as_str());
                    (a[1].to_string(), unescape(value))
                })
                .collect();
            let end = cap.get(0).unwrap().end();
            let inner = if VOID_ELEMENTS.contains(&name.as_str()) {
                String::new()
            } else {
                inner_html(html, &name, end)
            };
            Tag { name, attrs, inner }
        })
        .collect()
}

/// Elements whose attribute `name` equals `value`, in document order.
pub fn select(html: &str, name: &str, value: &str) -> Vec<Tag> {
    elements(html)
        .into_iter()
        .filter(|tag| tag.attr(name) == Some(value))
        .collect()
}

pub fn select_first(html: &str, name: &str, value: &str) -> Option<Tag> {
    select(html, name, value).into_iter().next()
}

/// Elements carrying attribute `name` at all.
pub fn with_attr(html: &str, name: &str) -> Vec<Tag> {
    elements(html)
        .into_iter()
        .filter(|tag| tag.attr(name).is_some())
        .collect()
}

pub fn text_content(html: &str) -> String {
    let any = ANY_TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap());
    unescape(any.replace_all(html, "").trim())
}

fn inner_html(html: &str, name: &str, start: usize) -> String {
    let boundary = Regex::new(&format!(r"<(/?){}[\s>/]", name)).unwrap();
    let rest = &html[start..];
    let mut depth = 1;

    for cap in boundary.captures_iter(rest) {
        if &cap[1] == "/" {
            depth -= 1;
            if depth == 0 {
                return rest[..cap.get(0).unwrap().start()].to_string();
            }
        } else {
            depth += 1;
        }
    }

    rest.to_string()
}

fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_preserves_document_order_and_nesting() {
        let html = r#"<ul><li data-k="x">one<b>!</b></li><li data-k="y">skip</li><li data-k="x">two</li></ul>"#;

        let texts: Vec<_> = select(html, "data-k", "x").iter().map(Tag::text).collect();
        assert_eq!(texts, vec!["one!", "two"]);
    }

    #[test]
    fn test_nested_same_name_elements() {
        let html = r#"<div id="outer"><div>a</div>b</div><div>c</div>"#;
        assert_eq!(select_first(html, "id", "outer").unwrap().text(), "ab");
    }

    #[test]
    fn test_attributes_are_unescaped() {
        let html = r#"<img src="/a?x=1&amp;y=2" alt="A">"#;
        let img = select_first(html, "alt", "A").unwrap();
        assert_eq!(img.attr("src"), Some("/a?x=1&y=2"));
        assert_eq!(img.inner, "");
    }
}
