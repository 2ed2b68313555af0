use serde::{Deserialize, Serialize};

use crate::program::Session;

/// Name roles a session record can attribute people under.
///
/// The roles are asymmetric on purpose: every role establishes a directory
/// profile for the person, but only the `Speakers` role adds the session to
/// that profile. The asymmetry is source behavior, kept visible here as a
/// policy method instead of scattered conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Speakers,
    Moderators,
    Panelists,
    Chairs,
}

impl Role {
    /// Walk order for directory building. Matches the order the source data
    /// presents roles in, so first-seen spellings win deterministically.
    pub const ALL: [Role; 4] = [
        Role::Speakers,
        Role::Moderators,
        Role::Panelists,
        Role::Chairs,
    ];

    /// Whether people attributed under this role get the session listed on
    /// their profile.
    pub fn contributes_sessions(self) -> bool {
        matches!(self, Role::Speakers)
    }

    /// The raw name list this role reads from a session record.
    pub fn names(self, session: &Session) -> &[String] {
        match self {
            Role::Speakers => &session.speakers,
            Role::Moderators => &session.moderators,
            Role::Panelists => &session.panelists,
            Role::Chairs => &session.chairs,
        }
    }
}

/// Summary of one session as it appears on a speaker profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerSession {
    pub day_key: String,
    pub day_title: String,
    pub date: String,
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    pub location: String,
}

/// Derived, deduplicated speaker identity.
///
/// Rebuilt from the program on every read; never persisted or partially
/// mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerProfile {
    /// Canonical identity key, unique within a directory.
    pub slug: String,
    /// Best available spelling of the name. When the same person appears
    /// both with and without a trailing country tag, the tagged spelling
    /// wins.
    pub display_name: String,
    /// Sessions attributed through the `Speakers` role, in program order.
    pub sessions: Vec<SpeakerSession>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_speakers_contribute_sessions() {
        let contributing: Vec<Role> = Role::ALL
            .into_iter()
            .filter(|role| role.contributes_sessions())
            .collect();
        assert_eq!(contributing, vec![Role::Speakers]);
    }

    #[test]
    fn test_role_reads_matching_list() {
        let session = Session {
            time: "10:00".to_string(),
            block: None,
            theme: None,
            title: "Panel".to_string(),
            location: "Hall B".to_string(),
            description: None,
            speakers: vec!["A".to_string()],
            moderators: vec!["B".to_string()],
            panelists: vec!["C".to_string(), "D".to_string()],
            chairs: vec!["E".to_string()],
        };

        assert_eq!(Role::Speakers.names(&session), ["A".to_string()]);
        assert_eq!(Role::Moderators.names(&session), ["B".to_string()]);
        assert_eq!(Role::Panelists.names(&session).len(), 2);
        assert_eq!(Role::Chairs.names(&session), ["E".to_string()]);
    }
}
