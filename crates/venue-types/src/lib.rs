pub mod directory;
pub mod favorites;
pub mod program;

pub use directory::*;
pub use favorites::FavoriteSet;
pub use program::*;
