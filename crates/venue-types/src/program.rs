use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Theme label applied to sessions that carry none.
pub const DEFAULT_THEME: &str = "Other";

/// One scheduled talk/panel block within a day.
///
/// Name lists hold the raw, human-entered strings from the program data.
/// They are cleaned up and deduplicated downstream; at this layer they are
/// kept exactly as loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display time, possibly a range ("09:00-09:30").
    pub time: String,

    /// Stable identifier distinct from the display time, when assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,

    /// Grouping label within the day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    pub title: String,
    pub location: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub speakers: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub moderators: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub panelists: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub chairs: Vec<String>,
}

impl Session {
    /// Identifier used for favoriting and deep-linking: the block when one
    /// is assigned, otherwise the display time.
    pub fn id(&self) -> &str {
        match self.block.as_deref() {
            Some(block) if !block.is_empty() => block,
            _ => &self.time,
        }
    }

    /// Theme with the fallback label applied.
    pub fn theme_or_default(&self) -> &str {
        match self.theme.as_deref() {
            Some(theme) if !theme.is_empty() => theme,
            _ => DEFAULT_THEME,
        }
    }
}

/// A named, dated track holding an ordered list of sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    #[serde(skip)]
    pub key: String,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

/// The full conference program: days in the order the source data lists
/// them.
///
/// The external JSON shape is a map from day key to day record. Map order
/// is meaningful (it is the order tracks are presented in), so
/// deserialization goes through a visitor that keeps encounter order
/// instead of collecting into a sorted map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    days: Vec<Day>,
}

impl Program {
    pub fn new(days: Vec<Day>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn day(&self, key: &str) -> Option<&Day> {
        self.days.iter().find(|day| day.key == key)
    }

    pub fn day_keys(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|day| day.key.as_str())
    }
}

impl Serialize for Program {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(&day.key, day)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Program {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ProgramVisitor;

        impl<'de> Visitor<'de> for ProgramVisitor {
            type Value = Program;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from day key to day record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Program, A::Error> {
                let mut days = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, mut day)) = access.next_entry::<String, Day>()? {
                    day.key = key;
                    days.push(day);
                }
                Ok(Program { days })
            }
        }

        deserializer.deserialize_map(ProgramVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(time: &str, block: Option<&str>) -> Session {
        Session {
            time: time.to_string(),
            block: block.map(String::from),
            theme: None,
            title: "Talk".to_string(),
            location: "Hall A".to_string(),
            description: None,
            speakers: vec![],
            moderators: vec![],
            panelists: vec![],
            chairs: vec![],
        }
    }

    #[test]
    fn test_session_id_prefers_block() {
        assert_eq!(session("09:00-09:30", Some("B1")).id(), "B1");
        assert_eq!(session("09:00-09:30", None).id(), "09:00-09:30");
        assert_eq!(session("09:00-09:30", Some("")).id(), "09:00-09:30");
    }

    #[test]
    fn test_theme_defaults() {
        let mut s = session("09:00", None);
        assert_eq!(s.theme_or_default(), DEFAULT_THEME);
        s.theme = Some("Keynotes".to_string());
        assert_eq!(s.theme_or_default(), "Keynotes");
        s.theme = Some(String::new());
        assert_eq!(s.theme_or_default(), DEFAULT_THEME);
    }

    #[test]
    fn test_program_preserves_day_order() {
        let json = r#"{
            "myopia_day": { "title": "Myopia Day", "date": "Feb 3, 2026", "sessions": [] },
            "innovation_day": { "title": "Innovation Day", "date": "Feb 4, 2026", "sessions": [] }
        }"#;

        let program: Program = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = program.day_keys().collect();
        assert_eq!(keys, vec!["myopia_day", "innovation_day"]);
        assert_eq!(program.day("innovation_day").unwrap().title, "Innovation Day");
        assert!(program.day("unknown").is_none());
    }

    #[test]
    fn test_session_optional_fields_default_empty() {
        let json = r#"{
            "time": "10:00",
            "title": "Panel",
            "location": "Hall B",
            "speakers": ["Jane Doe"]
        }"#;

        let s: Session = serde_json::from_str(json).unwrap();
        assert!(s.moderators.is_empty());
        assert!(s.panelists.is_empty());
        assert!(s.chairs.is_empty());
        assert!(s.description.is_none());
        assert!(s.block.is_none());
    }

    #[test]
    fn test_program_roundtrip_keeps_keys() {
        let program = Program::new(vec![Day {
            key: "myopia_day".to_string(),
            title: "Myopia Day".to_string(),
            date: "Feb 3, 2026".to_string(),
            sessions: vec![session("09:00", Some("B1"))],
        }]);

        let json = serde_json::to_string(&program).unwrap();
        let back: Program = serde_json::from_str(&json).unwrap();
        assert_eq!(back, program);
    }
}
