//! Message bodies as Quill-style deltas: `{"ops":[{"insert":"text"}]}`.
//!
//! Only inserts of text with `bold`, `italic`, `code` and `link` attributes
//! are understood. Anything that does not parse as a delta is shown as-is.

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Delta {
    ops: Vec<Op>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Op {
    insert: serde_json::Value,
    #[serde(default, skip_serializing_if = "Attributes::is_plain")]
    attributes: Attributes,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
struct Attributes {
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    code: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    link: Option<String>,
}

impl Attributes {
    fn is_plain(&self) -> bool {
        *self == Attributes::default()
    }
}

/// A run of body text sharing one style.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Span {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
    pub link: Option<String>,
}

/// Encode composer text as a single-insert delta. Quill always ends a
/// document with a newline, so one is appended when missing.
pub fn encode_plain(text: &str) -> String {
    let mut insert = text.to_string();
    if !insert.ends_with('\n') {
        insert.push('\n');
    }
    let delta = Delta {
        ops: vec![Op {
            insert: serde_json::Value::String(insert),
            attributes: Attributes::default(),
        }],
    };
    serde_json::to_string(&delta).unwrap_or_else(|_| text.to_string())
}

/// Decode a body into styled spans. Embeds (images, mentions) are skipped
/// and the trailing document newline is dropped.
pub fn parse(body: &str) -> Vec<Span> {
    let delta: Delta = match serde_json::from_str(body) {
        Ok(delta) => delta,
        Err(_) => {
            return vec![Span {
                text: body.to_string(),
                ..Span::default()
            }]
        }
    };

    let mut spans: Vec<Span> = delta
        .ops
        .into_iter()
        .filter_map(|op| match op.insert {
            serde_json::Value::String(text) => Some(Span {
                text,
                bold: op.attributes.bold,
                italic: op.attributes.italic,
                code: op.attributes.code,
                link: op.attributes.link,
            }),
            _ => None,
        })
        .collect();

    if let Some(last) = spans.last_mut() {
        if last.text.ends_with('\n') {
            last.text.pop();
        }
        if last.text.is_empty() {
            spans.pop();
        }
    }
    spans
}

/// Body reduced to its text, for editing and previews.
pub fn plain_text(body: &str) -> String {
    parse(body).into_iter().map(|s| s.text).collect()
}
