use venue_types::{FavoriteSet, Session};

/// Theme sentinel that disables theme filtering.
pub const ALL_THEMES: &str = "All";

/// Predicate set applied to a day's sessions before rendering.
///
/// All active predicates must hold for a session to survive. The filter
/// holds no session data and no user state; query, theme, and favorites
/// are passed in fresh on every application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilter {
    query: Option<String>,
    theme: Option<String>,
    favorites_only: bool,
}

impl SessionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring search over title, description, and the
    /// speaker/moderator/panelist name lists. An empty query matches
    /// everything.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        let query = query.into();
        self.query = if query.is_empty() { None } else { Some(query) };
        self
    }

    /// Exact match against the (defaulted) theme. The `"All"` sentinel
    /// matches everything.
    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        let theme = theme.into();
        self.theme = if theme.is_empty() || theme == ALL_THEMES {
            None
        } else {
            Some(theme)
        };
        self
    }

    /// Keep only sessions whose identifier is in the favorite set.
    pub fn favorites_only(mut self, yes: bool) -> Self {
        self.favorites_only = yes;
        self
    }

    /// True when no predicate is active, i.e. apply() is the identity.
    pub fn is_passthrough(&self) -> bool {
        self.query.is_none() && self.theme.is_none() && !self.favorites_only
    }

    /// Apply the predicates, preserving original relative order. An empty
    /// result is a value, not an error.
    pub fn apply(&self, sessions: &[Session], favorites: &FavoriteSet) -> Vec<Session> {
        sessions
            .iter()
            .filter(|session| self.matches(session, favorites))
            .cloned()
            .collect()
    }

    fn matches(&self, session: &Session, favorites: &FavoriteSet) -> bool {
        if let Some(theme) = &self.theme
            && session.theme_or_default() != theme.as_str()
        {
            return false;
        }

        if self.favorites_only && !favorites.contains(session.id()) {
            return false;
        }

        if let Some(query) = &self.query {
            let needle = query.to_lowercase();
            if !query_matches(session, &needle) {
                return false;
            }
        }

        true
    }
}

fn query_matches(session: &Session, needle: &str) -> bool {
    if session.title.to_lowercase().contains(needle) {
        return true;
    }

    if let Some(description) = &session.description
        && description.to_lowercase().contains(needle)
    {
        return true;
    }

    session
        .speakers
        .iter()
        .chain(session.moderators.iter())
        .chain(session.panelists.iter())
        .any(|name| name.to_lowercase().contains(needle))
}

/// Flip one identifier in the favorite set, returning the new set.
/// Persisting the result is the caller's responsibility.
pub fn toggle_favorite(favorites: &FavoriteSet, id: &str) -> FavoriteSet {
    let mut next = favorites.clone();
    if !next.remove(id) {
        next.insert(id);
    }
    next
}
