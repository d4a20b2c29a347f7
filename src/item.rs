use serde::Deserialize;

/// One node of the pre-parsed outline, as produced by the upstream parser.
///
/// The input contract is a JSON array of objects tagged with a `type` field:
///
/// ```json
/// [
///   {"type": "header", "level": 1, "text": "Changes"},
///   {"type": "list", "level": 0, "text": "fixed a thing", "marker": "-"},
///   {"type": "other"}
/// ]
/// ```
///
/// Items are trusted to already match this shape; anything that does not is
/// rejected by serde before the renderer ever sees it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Item {
    /// A heading. `level` 1 is a top-level title, 2 a subtitle; any other
    /// level is skipped by the renderer.
    Header { level: usize, text: String },
    /// A list entry. `level` is the indentation depth; `marker` is only
    /// shown for entries at depth 0.
    List {
        level: usize,
        text: String,
        #[serde(default)]
        marker: Option<String>,
    },
    /// Any node the parser recognized but the renderer does not display.
    /// Still significant: it terminates a run of list entries.
    Other,
}

impl Item {
    pub fn header(level: usize, text: impl Into<String>) -> Self {
        Item::Header {
            level,
            text: text.into(),
        }
    }

    pub fn list(level: usize, text: impl Into<String>) -> Self {
        Item::List {
            level,
            text: text.into(),
            marker: None,
        }
    }

    pub fn list_with_marker(level: usize, text: impl Into<String>, marker: impl Into<String>) -> Self {
        Item::List {
            level,
            text: text.into(),
            marker: Some(marker.into()),
        }
    }
}
