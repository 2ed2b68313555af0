use regex::Regex;
use std::sync::LazyLock;

/// Slug used when a name normalizes to nothing at all.
const FALLBACK_SLUG: &str = "speaker";

/// Trailing parenthesized suffix, commonly a country tag.
/// Example: "Jane Doe (Hong Kong)" -> suffix "(Hong Kong)"
static COUNTRY_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]+\)\s*$").unwrap());

/// Maximal run of characters that cannot appear in a slug.
static NON_SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Separator between names in a combined host/guest roster line.
static ROSTER_SEP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[,&]").unwrap());

/// Remove one trailing parenthesized suffix from a raw name.
///
/// Program data disambiguates people with a trailing country tag; two
/// spellings that differ only by that tag are the same person.
pub fn strip_country_tag(raw: &str) -> String {
    COUNTRY_TAG_REGEX.replace(raw, "").trim().to_string()
}

/// Map a raw name to its canonical identity key.
///
/// Strips the country tag, lower-cases, collapses every run of characters
/// outside `[a-z0-9]` to a single `-`, and trims the ends. Total: a name
/// that normalizes to nothing yields the literal fallback key.
pub fn slugify(raw: &str) -> String {
    let lowered = strip_country_tag(raw).to_lowercase();
    let slug = NON_SLUG_REGEX
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string();

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Whether a raw name denotes an actual person rather than a placeholder
/// or a role-label artifact.
///
/// The role-label check is a substring match, so a genuine name containing
/// "moderator" or "panelist" is rejected too. That matches the source data
/// conventions this was built against; see DESIGN.md.
pub fn is_linkable(raw: &str) -> bool {
    let n = raw.to_lowercase();
    if n.is_empty() || n == "-" || n == "tbc" || n == "tbd" {
        return false;
    }
    if n.contains("panelist") || n.contains("moderator") || n.contains("hosts & guests") {
        return false;
    }
    true
}

/// Pick the better of two spellings of the same identity.
///
/// The spelling carrying a country tag wins; ties keep the first argument.
/// Applied once per occurrence while folding, last-write-wins.
pub fn prefer_name<'a>(a: &'a str, b: &'a str) -> &'a str {
    if a.contains('(') && a.contains(')') {
        return a;
    }
    if b.contains('(') && b.contains(')') {
        return b;
    }
    a
}

/// Monogram from a name's initials, for speakers without a photo.
///
/// First letter of the first two whitespace-separated tokens; single-token
/// names use their first two characters.
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => String::new(),
        [only] => only.chars().take(2).collect::<String>().to_uppercase(),
        [first, second, ..] => {
            let mut monogram = String::new();
            monogram.extend(first.chars().next());
            monogram.extend(second.chars().next());
            monogram.to_uppercase()
        }
    }
}

/// A combined host/guest roster extracted from a session's speaker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostGuestRoster {
    pub hosts: Vec<String>,
    pub guests: Vec<String>,
}

impl HostGuestRoster {
    /// All names in roster order, hosts first.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.hosts
            .iter()
            .chain(self.guests.iter())
            .map(String::as_str)
    }
}

/// Detect and split a combined "Hosts: ... Guests: ..." speaker line.
///
/// Some program rows pack the whole roster into one speaker entry. When
/// both markers are present, the text between them is the host list and
/// the text after "Guests:" the guest list, each split on `,` or `&`.
/// Returns `None` when the markers are absent or out of order.
pub fn split_host_guest_roster(text: &str) -> Option<HostGuestRoster> {
    let hosts_at = text.find("Hosts:")?;
    let guests_at = text.find("Guests:")?;
    if guests_at < hosts_at {
        return None;
    }

    let hosts_text = &text[hosts_at + "Hosts:".len()..guests_at];
    let guests_text = &text[guests_at + "Guests:".len()..];

    Some(HostGuestRoster {
        hosts: split_roster_names(hosts_text),
        guests: split_roster_names(guests_text),
    })
}

fn split_roster_names(text: &str) -> Vec<String> {
    ROSTER_SEP_REGEX
        .split(text)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_strips_country_tag() {
        assert_eq!(slugify("Jane Doe (Hong Kong)"), "jane-doe");
        assert_eq!(slugify("Jane Doe"), "jane-doe");
        assert_eq!(slugify("Jane  Doe"), slugify("Jane Doe (Singapore)"));
    }

    #[test]
    fn test_slugify_collapses_punctuation() {
        assert_eq!(slugify("Dr. A. B. O'Neill"), "dr-a-b-o-neill");
        assert_eq!(slugify("  Jane   Doe  "), "jane-doe");
    }

    #[test]
    fn test_slugify_falls_back_when_empty() {
        assert_eq!(slugify(""), "speaker");
        assert_eq!(slugify("()"), "speaker");
        assert_eq!(slugify("---"), "speaker");
    }

    #[test]
    fn test_is_linkable_rejects_placeholders() {
        assert!(!is_linkable(""));
        assert!(!is_linkable("-"));
        assert!(!is_linkable("TBC"));
        assert!(!is_linkable("tbd"));
        assert!(is_linkable("Jane Doe"));
    }

    #[test]
    fn test_is_linkable_rejects_role_labels() {
        assert!(!is_linkable("Moderator"));
        assert!(!is_linkable("Panelists"));
        assert!(!is_linkable("Hosts & Guests"));
        // Substring match by design: real names containing a role word are
        // rejected too.
        assert!(!is_linkable("Moderator Smith"));
    }

    #[test]
    fn test_prefer_name_keeps_country_tag() {
        assert_eq!(prefer_name("Jane Doe", "Jane Doe (Hong Kong)"), "Jane Doe (Hong Kong)");
        assert_eq!(prefer_name("Jane Doe (Hong Kong)", "Jane Doe"), "Jane Doe (Hong Kong)");
        assert_eq!(prefer_name("Jane Doe", "Jane D."), "Jane Doe");
        assert_eq!(
            prefer_name("Jane Doe (HK)", "Jane Doe (Singapore)"),
            "Jane Doe (HK)"
        );
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Jane Doe"), "JD");
        assert_eq!(initials("Jane Alice Doe"), "JA");
        assert_eq!(initials("Cher"), "CH");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_split_host_guest_roster() {
        let roster =
            split_host_guest_roster("Hosts: Amy Tan & Ben Lee Guests: Carol Wu").unwrap();
        assert_eq!(roster.hosts, vec!["Amy Tan", "Ben Lee"]);
        assert_eq!(roster.guests, vec!["Carol Wu"]);
        assert_eq!(
            roster.names().collect::<Vec<_>>(),
            vec!["Amy Tan", "Ben Lee", "Carol Wu"]
        );
    }

    #[test]
    fn test_split_host_guest_roster_requires_both_markers() {
        assert!(split_host_guest_roster("Hosts: Amy Tan").is_none());
        assert!(split_host_guest_roster("Guests: Carol Wu").is_none());
        assert!(split_host_guest_roster("Jane Doe").is_none());
        assert!(split_host_guest_roster("Guests: Carol Wu Hosts: Amy Tan").is_none());
    }
}
