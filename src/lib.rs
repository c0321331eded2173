//! Core library for SLKED, a desktop editor for Warcraft III object data
//! (units, items, abilities). Provides the tooltip markup preview renderer,
//! the record/wire-value model, the declarative field schema with its
//! save-time rules, and the record store the GUI runs against.

mod config;
mod gui;
mod markup;
mod record;
mod schema;
pub mod statics;
mod store;
mod tooltip;

pub use config::{EditorConfig, load_disabled_fields};
pub use gui::run_gui;
pub use markup::{MarkupSpan, SpanColor, markup_spans, render_markup};
pub use record::{
    ObjectKind, Record, RecordSummary, SortKey, SortOrder, filter_summaries, quote_wire_value,
    sort_summaries, trim_quotes,
};
pub use schema::{ObjectSchema, WidgetKind, finalize_unit, schema_for};
pub use store::{MemoryStore, NewItem, NewUnit, RecordStore, StoreError};
pub use tooltip::generate_attack_tooltip;
