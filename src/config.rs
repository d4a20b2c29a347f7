use serde::Deserialize;
use thiserror::Error;

/// Raised at construction time when the supplied configuration is missing
/// required fields. Every missing path is collected before failing, so one
/// round trip is enough to fix a broken configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required options: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

/// Per-element id prefixes or class names, one slot per rendered element
/// kind. The same shape is used for `item_ids` and `item_classes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotNames {
    pub title: String,
    pub subtitle: String,
    pub marker: String,
    pub list_container: String,
    pub list_item: String,
}

/// A validated render configuration. Immutable once built; the renderer
/// uses exactly these values, never a blend with the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// One unit of indentation, repeated per list-entry level.
    pub space: String,
    /// When true, level-2 headers are suppressed and their role is taken
    /// over by the marker cell on top-level list entries.
    pub subtitles_as_labels: bool,
    /// Id prefixes; each rendered element gets `prefix + counter` as its id.
    pub item_ids: SlotNames,
    /// CSS class per element kind.
    pub item_classes: SlotNames,
}

impl Default for Config {
    /// The stock configuration. Only ever applied explicitly (the CLI uses
    /// it when no config file is given); validation never falls back to it.
    fn default() -> Self {
        Config {
            space: String::new(),
            subtitles_as_labels: true,
            item_ids: SlotNames {
                title: "title_id".into(),
                subtitle: "subtitle_id".into(),
                marker: "marker_id".into(),
                list_container: "container_id".into(),
                list_item: "item_id".into(),
            },
            item_classes: SlotNames {
                title: "title_class".into(),
                subtitle: "subtitle_class".into(),
                marker: "marker_class".into(),
                list_container: "container_class".into(),
                list_item: "item_class".into(),
            },
        }
    }
}

/// An unvalidated configuration, straight from JSON. Every field is
/// optional at this stage; [`ConfigDraft::validate`] is the only way to
/// turn a draft into a usable [`Config`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigDraft {
    pub space: Option<String>,
    pub subtitles_as_labels: Option<bool>,
    pub item_ids: Option<SlotNamesDraft>,
    pub item_classes: Option<SlotNamesDraft>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotNamesDraft {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub marker: Option<String>,
    pub list_container: Option<String>,
    pub list_item: Option<String>,
}

impl SlotNamesDraft {
    /// Records the missing sub-keys of one nested group under `key`, in
    /// bracket form (`item_ids[title]`).
    fn collect_missing(&self, key: &str, missing: &mut Vec<String>) {
        let slots = [
            ("title", &self.title),
            ("subtitle", &self.subtitle),
            ("marker", &self.marker),
            ("list_container", &self.list_container),
            ("list_item", &self.list_item),
        ];
        for (name, value) in slots {
            if value.is_none() {
                missing.push(format!("{}[{}]", key, name));
            }
        }
    }

    fn into_slot_names(self) -> SlotNames {
        SlotNames {
            title: self.title.unwrap_or_default(),
            subtitle: self.subtitle.unwrap_or_default(),
            marker: self.marker.unwrap_or_default(),
            list_container: self.list_container.unwrap_or_default(),
            list_item: self.list_item.unwrap_or_default(),
        }
    }
}

impl ConfigDraft {
    /// Checks the draft against the required-field schema and promotes it
    /// to a [`Config`].
    ///
    /// Missing top-level keys and missing nested keys are accumulated
    /// across both passes and reported together; nested keys are only
    /// inspected when their group is present at all. There is no partial
    /// acceptance: a draft either validates completely or is rejected.
    pub fn validate(self) -> Result<Config, ConfigError> {
        let mut missing = Vec::new();

        if self.space.is_none() {
            missing.push("space".to_string());
        }
        if self.subtitles_as_labels.is_none() {
            missing.push("subtitles_as_labels".to_string());
        }
        if self.item_ids.is_none() {
            missing.push("item_ids".to_string());
        }
        if self.item_classes.is_none() {
            missing.push("item_classes".to_string());
        }

        if let Some(ids) = &self.item_ids {
            ids.collect_missing("item_ids", &mut missing);
        }
        if let Some(classes) = &self.item_classes {
            classes.collect_missing("item_classes", &mut missing);
        }

        if !missing.is_empty() {
            return Err(ConfigError::MissingFields(missing));
        }

        // All fields verified present above; the unwrap_or_default calls in
        // into_slot_names never take the default branch here.
        Ok(Config {
            space: self.space.unwrap_or_default(),
            subtitles_as_labels: self.subtitles_as_labels.unwrap_or(false),
            item_ids: self.item_ids.unwrap_or_default().into_slot_names(),
            item_classes: self.item_classes.unwrap_or_default().into_slot_names(),
        })
    }
}
