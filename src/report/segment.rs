//! Tolerant segmentation of a raw provider reply into named sections.
//!
//! The reply format is a strong suggestion to the model, not a contract it
//! is forced to honor: markers are located case-insensitively anywhere in
//! the text, in any order, with or without surrounding markdown decoration.
//! A section runs from just after its marker to the start of the next
//! recognized marker, or the end of the text.

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker labels requested from the provider and recognized here.
pub const SUMMARY_MARKER: &str = "SUMMARY:";
pub const ROLE_SUMMARIES_MARKER: &str = "ROLE-WISE SUMMARIES:";
pub const CHECKLIST_MARKER: &str = "CHECKLIST:";

/// Matches a marker with optional bold/heading decoration, e.g.
/// `SUMMARY:`, `**CHECKLIST:**`, `Role-wise Summaries:`.
static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\*{0,2}\b(ROLE[-\s]WISE\s+SUMMARIES|SUMMARY|CHECKLIST)\b\*{0,2}:\*{0,2}")
        .expect("marker regex is valid")
});

/// Sections located in one raw reply.
#[derive(Debug, Clone, PartialEq)]
pub struct Segments {
    /// Overall summary. Falls back to the whole reply when the provider
    /// ignored the marker structure entirely, so it is never empty unless
    /// the reply itself was.
    pub summary: String,

    /// Raw text of the role-wise summaries section, if its marker was found.
    pub role_summaries: Option<String>,

    /// Raw text of the checklist section, if its marker was found.
    pub checklist: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SectionKind {
    Summary,
    RoleSummaries,
    Checklist,
}

struct Hit {
    kind: SectionKind,
    start: usize,
    end: usize,
}

/// Split a raw reply into its marked sections.
pub fn segment(raw: &str) -> Segments {
    let hits: Vec<Hit> = MARKER_RE
        .captures_iter(raw)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(Hit {
                kind: classify(name.as_str()),
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect();

    if hits.is_empty() {
        tracing::debug!("[Segment] no markers found, whole reply becomes the summary");
        return Segments {
            summary: raw.trim().to_string(),
            role_summaries: None,
            checklist: None,
        };
    }

    let mut summary: Option<String> = None;
    let mut role_summaries: Option<String> = None;
    let mut checklist: Option<String> = None;

    for (i, hit) in hits.iter().enumerate() {
        let end = hits.get(i + 1).map(|next| next.start).unwrap_or(raw.len());
        let text = clean_section(&raw[hit.end..end]);

        // First occurrence of each marker wins; later duplicates still act
        // as boundaries for the section before them.
        let slot = match hit.kind {
            SectionKind::Summary => &mut summary,
            SectionKind::RoleSummaries => &mut role_summaries,
            SectionKind::Checklist => &mut checklist,
        };
        if slot.is_none() {
            *slot = Some(text);
        }
    }

    Segments {
        summary: summary.unwrap_or_default(),
        role_summaries,
        checklist,
    }
}

fn classify(name: &str) -> SectionKind {
    let upper = name.to_uppercase();
    if upper.starts_with("ROLE") {
        SectionKind::RoleSummaries
    } else if upper == "SUMMARY" {
        SectionKind::Summary
    } else {
        SectionKind::Checklist
    }
}

/// Trim a section slice, dropping heading decoration left behind by a
/// marker that followed it (e.g. the `##` of `## CHECKLIST:`).
fn clean_section(text: &str) -> String {
    text.trim().trim_end_matches('#').trim_end().to_string()
}
