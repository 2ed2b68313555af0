use std::collections::HashMap;

use venue_core::{is_linkable, prefer_name, slugify, split_host_guest_roster};
use venue_types::{Day, Program, Role, Session, SpeakerProfile, SpeakerSession};

/// Fold every session of every day into a deduplicated speaker directory,
/// sorted by display name.
///
/// Dedup key is the slug of the normalized name, so "Jane Doe" and
/// "Jane Doe (Hong Kong)" merge into one profile carrying the tagged
/// spelling. Placeholder and role-label entries are skipped silently.
/// Rebuilt in full on every call; the dataset is low hundreds of records.
pub fn build_directory(program: &Program) -> Vec<SpeakerProfile> {
    let mut builder = DirectoryBuilder::default();

    for day in program.days() {
        for session in &day.sessions {
            // Some rows pack the whole roster into one speaker entry as
            // "Hosts: ... Guests: ...". Everyone named there counts as a
            // speaker, and the ordinary role walk is skipped.
            let joined = session.speakers.join(" ");
            if let Some(roster) = split_host_guest_roster(&joined) {
                for name in roster.names() {
                    builder.record(day, session, name, true);
                }
                continue;
            }

            for role in Role::ALL {
                for raw in role.names(session) {
                    builder.record(day, session, raw, role.contributes_sessions());
                }
            }
        }
    }

    builder.finish()
}

#[derive(Default)]
struct DirectoryBuilder {
    profiles: HashMap<String, SpeakerProfile>,
}

impl DirectoryBuilder {
    fn record(&mut self, day: &Day, session: &Session, raw: &str, contributes: bool) {
        let name = raw.trim();
        if name.is_empty() || !is_linkable(name) {
            return;
        }

        let slug = slugify(name);
        let profile = self
            .profiles
            .entry(slug.clone())
            .and_modify(|existing| {
                existing.display_name = prefer_name(&existing.display_name, name).to_string();
            })
            .or_insert_with(|| SpeakerProfile {
                slug,
                display_name: name.to_string(),
                sessions: Vec::new(),
            });

        if contributes {
            profile.sessions.push(SpeakerSession {
                day_key: day.key.clone(),
                day_title: day.title.clone(),
                date: day.date.clone(),
                time: session.time.clone(),
                block: session.block.clone(),
                title: session.title.clone(),
                theme: session.theme.clone(),
                location: session.location.clone(),
            });
        }
    }

    fn finish(self) -> Vec<SpeakerProfile> {
        let mut directory: Vec<SpeakerProfile> = self.profiles.into_values().collect();
        // Case-insensitive name order; slug breaks the (unlikely) tie of two
        // identities sharing a display name.
        directory.sort_by_cached_key(|p| (p.display_name.to_lowercase(), p.slug.clone()));
        directory
    }
}

/// One letter bucket of the directory index rail.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LetterGroup {
    pub letter: String,
    pub speakers: Vec<SpeakerProfile>,
}

/// Group an already-sorted directory by the first letter of each display
/// name. Names not starting with a letter land in the "#" bucket, which
/// sorts first.
pub fn group_by_letter(directory: &[SpeakerProfile]) -> Vec<LetterGroup> {
    let mut groups: Vec<LetterGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for profile in directory {
        let letter = match profile.display_name.chars().next() {
            Some(c) if c.is_alphabetic() => c.to_uppercase().to_string(),
            _ => "#".to_string(),
        };

        match index.get(&letter) {
            Some(&at) => groups[at].speakers.push(profile.clone()),
            None => {
                index.insert(letter.clone(), groups.len());
                groups.push(LetterGroup {
                    letter,
                    speakers: vec![profile.clone()],
                });
            }
        }
    }

    groups.sort_by(|a, b| a.letter.cmp(&b.letter));
    groups
}
