pub mod access;
pub mod config;
pub mod error;
pub mod favorites;
pub mod images;
pub mod kv;
pub mod program;

pub use access::AccessGate;
pub use config::Config;
pub use error::{Error, Result};
pub use favorites::{load_favorites, save_favorites, FAVORITES_KEY};
pub use images::{Avatar, ImageMap, IMAGES_FILE};
pub use kv::{FileKvStore, KvStore, MemoryKvStore};
pub use program::{day_date, load_program, PROGRAM_FILE};
