//! Import providers: document conversion behind the `ImportProvider` port.
//!
//! The CLI chains them in priority order: the dedicated import tool first,
//! the inline generator second.

mod dedicated;
mod inline;

pub use dedicated::{DedicatedImportTool, DEFAULT_IMPORT_TOOL};
pub use inline::{GeneratorCommand, InlineConversion};
