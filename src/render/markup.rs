//! Rich text with numbered emphasis tags.
//!
//! Translators mark emphasized spans as `<1>…</1>` so the markup survives
//! translation without exposing HTML in the dictionaries. Tags whose opening
//! and closing numbers disagree are left as literal text.

use leptos::prelude::*;
use regex::Regex;
use std::sync::OnceLock;

const EMPHASIS_CLASS: &str = "font-semibold text-slate-900";

static TAG_PAIR_REGEX: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichSegment {
    Plain(String),
    Emphasis(String),
}

/// Split text into plain and emphasized segments, in order.
pub fn parse_rich_text(text: &str) -> Vec<RichSegment> {
    let regex = TAG_PAIR_REGEX.get_or_init(|| Regex::new(r"(?s)<(\d+)>(.*?)</(\d+)>").unwrap());

    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut last_end = 0;

    for cap in regex.captures_iter(text) {
        let Some(whole) = cap.get(0) else { continue };
        plain.push_str(&text[last_end..whole.start()]);

        if cap[1] == cap[3] {
            if !plain.is_empty() {
                segments.push(RichSegment::Plain(std::mem::take(&mut plain)));
            }
            segments.push(RichSegment::Emphasis(cap[2].to_string()));
        } else {
            plain.push_str(whole.as_str());
        }

        last_end = whole.end();
    }

    plain.push_str(&text[last_end..]);
    if !plain.is_empty() {
        segments.push(RichSegment::Plain(plain));
    }

    segments
}

/// Text with its emphasized spans wrapped in `<span>`s.
#[component]
pub fn RichText(text: String) -> impl IntoView {
    parse_rich_text(&text)
        .into_iter()
        .map(|segment| match segment {
            RichSegment::Plain(plain) => plain.into_any(),
            RichSegment::Emphasis(emphasis) => {
                view! { <span class=EMPHASIS_CLASS>{emphasis}</span> }.into_any()
            }
        })
        .collect_view()
}
