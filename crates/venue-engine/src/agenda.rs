use std::collections::HashMap;

use serde::Serialize;
use venue_types::Session;

/// One theme's worth of a day's agenda, in original session order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeGroup {
    pub theme: String,
    pub sessions: Vec<Session>,
}

/// Partition sessions into theme groups.
///
/// Groups appear in the order their theme is first seen; sessions keep
/// their original relative order within each group. Sessions without a
/// theme fall under the default label. Concatenating the groups restores
/// the input exactly.
pub fn group_by_theme(sessions: &[Session]) -> Vec<ThemeGroup> {
    let mut groups: Vec<ThemeGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for session in sessions {
        let theme = session.theme_or_default();
        match index.get(theme) {
            Some(&at) => groups[at].sessions.push(session.clone()),
            None => {
                index.insert(theme.to_string(), groups.len());
                groups.push(ThemeGroup {
                    theme: theme.to_string(),
                    sessions: vec![session.clone()],
                });
            }
        }
    }

    groups
}

/// Split a display time for two-line rendering when it is a range.
///
/// Ranges use either a plain hyphen or an en-dash in the source data.
pub fn split_time_display(time: &str) -> (String, Option<String>) {
    match time.split_once(['-', '–']) {
        Some((start, end)) => (start.trim().to_string(), Some(end.trim().to_string())),
        None => (time.trim().to_string(), None),
    }
}
