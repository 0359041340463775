//! Role canonicalization and per-role line bucketing.
//!
//! Section text arrives as free-form lines under free-text role headers
//! ("FOR WEB DEVELOPERS", "**Web Developer:**", "Project Manager:").
//! Headers are normalized to a small canonical role set by substring
//! keyword matching; content lines accumulate under the active role.

use std::collections::BTreeMap;

use serde::Serialize;

/// Canonical role identifiers, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    WebDeveloper,
    GraphicDesigner,
    ProjectManager,
    BusinessStakeholder,
    ToolsAndTechnologies,
    Other,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WebDeveloper => "Web Developer",
            Self::GraphicDesigner => "Graphic Designer",
            Self::ProjectManager => "Project Manager",
            Self::BusinessStakeholder => "Business Stakeholder",
            Self::ToolsAndTechnologies => "Tools & Technologies",
            Self::Other => "Other",
        }
    }

    /// Normalize a free-text role label to a canonical role.
    ///
    /// Case-insensitive substring matching, first keyword wins. This is a
    /// heuristic; the exhaustive table lives in the tests below, so keyword
    /// additions stay localized here.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("develop") {
            Self::WebDeveloper
        } else if lower.contains("design") {
            Self::GraphicDesigner
        } else if lower.contains("manager") || lower.contains("management") {
            Self::ProjectManager
        } else if lower.contains("business") || lower.contains("stakeholder") {
            Self::BusinessStakeholder
        } else if lower.contains("tool") || lower.contains("technolog") {
            Self::ToolsAndTechnologies
        } else {
            Self::Other
        }
    }
}

/// Ordered lines collected for one canonical role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleBucket {
    pub role: Role,

    /// Literal header label, retained for display when canonicalization
    /// fell back to `Other`.
    pub label: Option<String>,

    pub lines: Vec<String>,
}

impl RoleBucket {
    /// Heading shown for this bucket.
    pub fn display_name(&self) -> &str {
        match (&self.role, &self.label) {
            (Role::Other, Some(label)) => label,
            _ => self.role.as_str(),
        }
    }
}

/// How content lines under a header are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionMode {
    /// Every non-header line is content.
    RoleSummaries,
    /// Only bullet lines are content; the bullet marker is stripped.
    Checklist,
}

/// Decompose section text into per-role buckets.
///
/// Lines before the first header are discarded. Duplicate headers for the
/// same canonical role append to the same bucket. Buckets that end up with
/// no content lines are not stored at all.
pub fn bucketize(text: &str, mode: SectionMode) -> BTreeMap<Role, RoleBucket> {
    let mut buckets: BTreeMap<Role, RoleBucket> = BTreeMap::new();
    let mut current: Option<Role> = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(label) = header_label(line) {
            let role = Role::from_label(&label);
            buckets.entry(role).or_insert_with(|| RoleBucket {
                role,
                label: (role == Role::Other).then(|| label.clone()),
                lines: Vec::new(),
            });
            current = Some(role);
            continue;
        }

        let Some(role) = current else {
            continue;
        };

        let content = match mode {
            SectionMode::Checklist => match strip_bullet(line) {
                Some(item) => item,
                None => continue,
            },
            SectionMode::RoleSummaries => line.to_string(),
        };

        if !content.is_empty() {
            if let Some(bucket) = buckets.get_mut(&role) {
                bucket.lines.push(content);
            }
        }
    }

    buckets.retain(|_, bucket| !bucket.lines.is_empty());
    buckets
}

/// Extract a role label if the line is a section header.
///
/// A header is a line wrapped in `**..**`, or ending with a colon, or
/// beginning with a "for <role>" phrasing. A bulleted line is never a
/// header, even when it ends with a colon.
fn header_label(line: &str) -> Option<String> {
    if strip_bullet(line).is_some() {
        return None;
    }

    let bold = line.starts_with("**") && line.ends_with("**") && line.len() > 4;
    let inner = if bold {
        line[2..line.len() - 2].trim()
    } else {
        line
    };

    let has_colon = inner.ends_with(':');
    let stripped = inner.trim_end_matches(':').trim();

    let label = if stripped.to_lowercase().starts_with("for ") {
        stripped.get(4..).unwrap_or("").trim().to_string()
    } else if bold || has_colon {
        stripped.to_string()
    } else {
        return None;
    };

    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

/// Strip a leading bullet marker, returning the item text.
fn strip_bullet(line: &str) -> Option<String> {
    for marker in ["- ", "* ", "\u{2022} "] {
        if let Some(rest) = line.strip_prefix(marker) {
            return Some(rest.trim().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exhaustive normalization table; future keyword additions extend this.
    #[test]
    fn label_normalization_table() {
        let table = [
            ("WEB DEVELOPER", Role::WebDeveloper),
            ("Web Developers", Role::WebDeveloper),
            ("Backend Developer", Role::WebDeveloper),
            ("Development Team", Role::WebDeveloper),
            ("GRAPHIC DESIGNER", Role::GraphicDesigner),
            ("UI/UX Design", Role::GraphicDesigner),
            ("PROJECT MANAGER", Role::ProjectManager),
            ("Product Management", Role::ProjectManager),
            ("Business Stakeholder", Role::BusinessStakeholder),
            ("BUSINESS OWNERS", Role::BusinessStakeholder),
            ("Key Stakeholders", Role::BusinessStakeholder),
            ("TOOLS & TECHNOLOGIES", Role::ToolsAndTechnologies),
            ("Technology Stack", Role::ToolsAndTechnologies),
            ("Required Tools", Role::ToolsAndTechnologies),
            ("OTHER ROLES", Role::Other),
            ("Legal Team", Role::Other),
            ("", Role::Other),
        ];

        for (label, expected) in table {
            assert_eq!(Role::from_label(label), expected, "label: {:?}", label);
        }
    }

    #[test]
    fn normalization_is_idempotent_across_spellings() {
        let a = Role::from_label("WEB DEVELOPERS");
        let b = Role::from_label("Web Developer");
        assert_eq!(a, b);
        assert_eq!(a, Role::WebDeveloper);
    }

    #[test]
    fn header_forms_match_the_same_role() {
        let bold = "**Web Developer:**";
        let colon = "Web Developer:";
        let for_phrase = "FOR WEB DEVELOPERS";

        for header in [bold, colon, for_phrase] {
            let buckets = bucketize(
                &format!("{}\nShared content line.", header),
                SectionMode::RoleSummaries,
            );
            let bucket = buckets.get(&Role::WebDeveloper).expect(header);
            assert_eq!(bucket.lines, vec!["Shared content line.".to_string()]);
        }
    }

    #[test]
    fn checklist_keeps_only_bullets_and_strips_markers() {
        let text = "**WEB DEVELOPER:**\n- Build API\nThis aside is discarded.\n* Write tests\n\u{2022} Review PRs";
        let buckets = bucketize(text, SectionMode::Checklist);

        let bucket = &buckets[&Role::WebDeveloper];
        assert_eq!(bucket.lines, vec!["Build API", "Write tests", "Review PRs"]);
    }

    #[test]
    fn role_summaries_keep_plain_lines() {
        let text = "**PROJECT MANAGER:**\nOwns the timeline.\nCoordinates reviews.";
        let buckets = bucketize(text, SectionMode::RoleSummaries);

        let bucket = &buckets[&Role::ProjectManager];
        assert_eq!(bucket.lines, vec!["Owns the timeline.", "Coordinates reviews."]);
    }

    #[test]
    fn lines_before_any_header_are_discarded() {
        let text = "Stray intro line.\n**WEB DEVELOPER:**\n- Build API";
        let buckets = bucketize(text, SectionMode::Checklist);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[&Role::WebDeveloper].lines, vec!["Build API"]);
    }

    #[test]
    fn empty_buckets_are_never_stored() {
        let text = "**GRAPHIC DESIGNER:**\n**WEB DEVELOPER:**\n- Build API";
        let buckets = bucketize(text, SectionMode::Checklist);

        assert!(!buckets.contains_key(&Role::GraphicDesigner));
        assert!(buckets.contains_key(&Role::WebDeveloper));
        assert!(buckets.values().all(|b| !b.lines.is_empty()));
    }

    #[test]
    fn duplicate_headers_append_to_the_same_bucket() {
        let text = "**WEB DEVELOPER:**\n- Build API\n**Web Developers:**\n- Write tests";
        let buckets = bucketize(text, SectionMode::Checklist);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[&Role::WebDeveloper].lines, vec!["Build API", "Write tests"]);
    }

    #[test]
    fn other_retains_the_literal_label() {
        let text = "**LEGAL TEAM:**\n- Review the contract";
        let buckets = bucketize(text, SectionMode::Checklist);

        let bucket = &buckets[&Role::Other];
        assert_eq!(bucket.label.as_deref(), Some("LEGAL TEAM"));
        assert_eq!(bucket.display_name(), "LEGAL TEAM");
    }

    #[test]
    fn canonical_roles_do_not_carry_labels() {
        let text = "**WEB DEVELOPER:**\n- Build API";
        let buckets = bucketize(text, SectionMode::Checklist);

        let bucket = &buckets[&Role::WebDeveloper];
        assert_eq!(bucket.label, None);
        assert_eq!(bucket.display_name(), "Web Developer");
    }

    #[test]
    fn bulleted_line_ending_with_colon_is_content_not_header() {
        let text = "**WEB DEVELOPER:**\n- Set up CI:\n- Build API";
        let buckets = bucketize(text, SectionMode::Checklist);

        assert_eq!(buckets[&Role::WebDeveloper].lines, vec!["Set up CI:", "Build API"]);
    }
}
