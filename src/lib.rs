//! # clgview
//!
//! Renders a pre-parsed changelog outline (headers, list entries, other
//! nodes) into nested HTML fragments. Consecutive list entries are grouped
//! under one container, every emitted element carries a sequential id built
//! from a configured prefix, and a display mode decides whether second-level
//! headings appear as headings or as inline markers on the entries below
//! them.
//!
//! Parsing source text into items and serving the emitted markup are both
//! out of scope; this crate consumes the parser's output contract and
//! appends fragments to a string sink.

pub mod config;
pub mod item;
pub mod renderer;

pub use config::{Config, ConfigDraft, ConfigError, SlotNames, SlotNamesDraft};
pub use item::Item;
pub use renderer::{RenderState, Renderer};
