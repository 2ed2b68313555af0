// Engine module - derived views over loaded program data
// This layer sits between the program records (types) and CLI presentation

mod agenda;
mod directory;
mod filter;

pub use agenda::{group_by_theme, split_time_display, ThemeGroup};
pub use directory::{build_directory, group_by_letter, LetterGroup};
pub use filter::{toggle_favorite, SessionFilter};

use venue_types::{FavoriteSet, Session};

// Façade API - stable public interface for the CLI layer

/// Filter a day's sessions, then group what survives by theme.
pub fn filtered_agenda(
    sessions: &[Session],
    filter: &SessionFilter,
    favorites: &FavoriteSet,
) -> Vec<ThemeGroup> {
    let kept = filter.apply(sessions, favorites);
    group_by_theme(&kept)
}
