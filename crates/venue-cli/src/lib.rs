// NOTE: venue Architecture Rationale
//
// Why rebuild-on-read (not an index)?
// - The program is one bundled JSON file, low hundreds of sessions
// - The speaker directory and agenda groupings derive in one pass
// - Rebuilding per command keeps the derived views impossible to desync
// - Trade-off: repeated work per invocation, negligible at this size
//
// Why an injected key-value store (not ambient state)?
// - Favorites and the access flag are the only mutable user state
// - Passing the store in keeps every engine operation pure and testable
// - One JSON document per key keeps the on-disk state inspectable

mod args;
mod commands;
mod context;
mod handlers;
mod output;

pub use args::{Cli, Commands, ExportFormat, ExportTarget, FavCommand, OutputFormat, SpeakersCommand};
pub use commands::run;
