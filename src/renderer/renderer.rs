use crate::config::{Config, ConfigDraft, ConfigError};
use crate::item::Item;
use crate::renderer::state::RenderState;

/// Renders a pre-parsed outline into nested HTML fragments.
///
/// The walk is a single synchronous pass: consecutive list entries are
/// grouped under one container `<div>`, headings get sequential ids from a
/// shared counter, and level-2 headings are either emitted as `<h3>` blocks
/// or suppressed in favour of per-entry marker cells, depending on
/// `subtitles_as_labels`.
#[derive(Debug)]
pub struct Renderer {
    items: Vec<Item>,
    config: Config,
}

impl Renderer {
    /// Builds a renderer from an unvalidated configuration draft.
    /// Construction is all-or-nothing: if any required field is missing the
    /// error lists every missing path and no renderer is produced.
    pub fn new(items: Vec<Item>, draft: ConfigDraft) -> Result<Self, ConfigError> {
        let config = draft.validate()?;
        Ok(Self::with_config(items, config))
    }

    /// Builds a renderer from an already-validated configuration.
    pub fn with_config(items: Vec<Item>, config: Config) -> Self {
        Self { items, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Performs the full pass and returns the rendered fragments.
    ///
    /// Each call runs with a fresh [`RenderState`], so repeated calls on
    /// the same renderer produce identical output.
    pub fn render(&self) -> String {
        let mut output = String::new();
        self.render_into(&mut output);
        output
    }

    /// Performs the full pass, appending fragments to `output` in emission
    /// order.
    pub fn render_into(&self, output: &mut String) {
        let mut state = RenderState::new();

        for item in &self.items {
            match item {
                Item::Header { level, text } => {
                    self.end_list_if_open(&mut state, output);
                    self.handle_title(*level, text, &mut state, output);
                }
                Item::List {
                    level,
                    text,
                    marker,
                } => {
                    self.handle_list_item(*level, text, marker.as_deref(), &mut state, output);
                }
                Item::Other => {
                    self.end_list_if_open(&mut state, output);
                }
            }
        }

        // A sequence ending mid-run still closes its container.
        self.end_list_if_open(&mut state, output);
    }

    fn end_list_if_open(&self, state: &mut RenderState, output: &mut String) {
        if state.leave_list() {
            tracing::debug!(list_count = state.list_count, "closing list container");
            output.push_str("</div>");
        }
    }

    fn handle_title(&self, level: usize, text: &str, state: &mut RenderState, output: &mut String) {
        let ids = &self.config.item_ids;
        let classes = &self.config.item_classes;

        match level {
            1 => {
                let n = state.next_title();
                output.push_str(&format!(
                    "<h2 id=\"{}{}\" class=\"{}\">{}</h2>",
                    ids.title, n, classes.title, text
                ));
            }
            2 => {
                // In labels mode the subtitle's role is carried by the
                // marker cells of the entries that follow it.
                if self.config.subtitles_as_labels {
                    tracing::debug!(text, "subtitle suppressed in labels mode");
                    return;
                }
                let n = state.next_title();
                output.push_str(&format!(
                    "<h3 id=\"{}{}\" class=\"{}\">{}</h3>",
                    ids.title, n, classes.title, text
                ));
            }
            other => {
                // Unrecognized heading depth: skip, keep counters intact.
                tracing::debug!(level = other, text, "ignoring header with unsupported level");
            }
        }
    }

    fn handle_list_item(
        &self,
        level: usize,
        text: &str,
        marker: Option<&str>,
        state: &mut RenderState,
        output: &mut String,
    ) {
        let ids = &self.config.item_ids;
        let classes = &self.config.item_classes;

        if state.enter_list() {
            tracing::debug!(list_count = state.list_count, "opening list container");
            output.push_str(&format!(
                "<div id=\"{}{}\" class=\"{}\">",
                ids.list_container, state.list_count, classes.list_container
            ));
        }

        let n = state.next_list_item();

        output.push_str("<div style=\"display:flex\">");
        if self.config.subtitles_as_labels {
            // Marker cell; only depth-0 entries show their marker text.
            let marker_text = if level == 0 { marker.unwrap_or("") } else { "" };
            output.push_str(&format!(
                "<div style=\"flex: 0.15\" id=\"{}{}\" class=\"{}\">{}</div>",
                ids.marker, n, classes.marker, marker_text
            ));
        }
        output.push_str(&format!(
            "<div style=\"flex: 2\" id=\"{}{}\" class=\"{}\">{}{}</div>",
            ids.list_item,
            n,
            classes.list_item,
            self.config.space.repeat(level),
            text
        ));
        output.push_str("</div>");
    }
}
