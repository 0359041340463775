//! Rendering and export of a [`Report`].
//!
//! Each artifact is independently exportable: display markdown for the
//! view, per-section plain text for the clipboard, and `.txt` files named
//! from the source document's base name with a fixed per-artifact suffix.

use std::path::{Path, PathBuf};

use super::roles::{RoleBucket, SectionMode};
use super::segment::{CHECKLIST_MARKER, ROLE_SUMMARIES_MARKER, SUMMARY_MARKER};
use super::Report;
use crate::error::Result;

pub const SUMMARY_SUFFIX: &str = "_summary.txt";
pub const ROLE_SUMMARIES_SUFFIX: &str = "_role_summaries.txt";
pub const CHECKLIST_SUFFIX: &str = "_checklist.txt";

/// Placeholder shown where a section or bucket produced no content.
pub const NO_CONTENT: &str = "(no content)";

impl Report {
    /// Render the full report as display markdown.
    ///
    /// Absent sections render as an explicit placeholder rather than being
    /// silently dropped; empty buckets never exist in the model, so every
    /// rendered role heading has content under it.
    pub fn display_markdown(&self) -> String {
        let mut out = String::new();

        out.push_str("# Summary\n\n");
        if self.summary().is_empty() {
            out.push_str(NO_CONTENT);
        } else {
            out.push_str(self.summary());
        }
        out.push_str("\n\n# Role Summaries\n\n");
        match self.role_summaries() {
            Some(buckets) => {
                for bucket in buckets.values() {
                    out.push_str(&format!("## {}\n\n", bucket.display_name()));
                    for line in &bucket.lines {
                        out.push_str(line);
                        out.push('\n');
                    }
                    out.push('\n');
                }
            }
            None => {
                out.push_str(NO_CONTENT);
                out.push('\n');
            }
        }

        out.push_str("\n# Checklist\n\n");
        match self.checklist() {
            Some(buckets) => {
                for bucket in buckets.values() {
                    out.push_str(&format!("## {}\n\n", bucket.display_name()));
                    for line in &bucket.lines {
                        out.push_str(&format!("- [ ] {}\n", line));
                    }
                    out.push('\n');
                }
            }
            None => {
                out.push_str(NO_CONTENT);
                out.push('\n');
            }
        }

        out.trim_end().to_string()
    }

    /// Plain text of the summary section, for the clipboard.
    pub fn summary_text(&self) -> &str {
        self.summary()
    }

    /// Plain text of the role summaries section, if present.
    pub fn role_summaries_text(&self) -> Option<String> {
        self.role_summaries()
            .map(|buckets| format_buckets(buckets.values(), SectionMode::RoleSummaries))
    }

    /// Plain text of the checklist section, if present.
    pub fn checklist_text(&self) -> Option<String> {
        self.checklist()
            .map(|buckets| format_buckets(buckets.values(), SectionMode::Checklist))
    }

    /// Serialize the whole report under the same marker conventions the
    /// segmenter reads, so an exported report re-segments to the same
    /// section boundaries. Absent sections are omitted.
    pub fn to_plain_text(&self) -> String {
        let mut out = format!("{}\n{}\n", SUMMARY_MARKER, self.summary());

        if let Some(text) = self.role_summaries_text() {
            out.push_str(&format!("\n{}\n{}", ROLE_SUMMARIES_MARKER, text));
        }
        if let Some(text) = self.checklist_text() {
            out.push_str(&format!("\n{}\n{}", CHECKLIST_MARKER, text));
        }

        out
    }

    /// Write one `.txt` file per present section into `dir`, named
    /// `<base>_<artifact>.txt` from the source document's name.
    pub fn export_artifacts(&self, source_name: &str, dir: &Path) -> Result<Vec<PathBuf>> {
        let base = source_name.split('.').next().unwrap_or(source_name);
        std::fs::create_dir_all(dir)?;

        let mut artifacts: Vec<(String, String)> = Vec::new();
        artifacts.push((
            format!("{}{}", base, SUMMARY_SUFFIX),
            self.summary_text().to_string(),
        ));
        if let Some(text) = self.role_summaries_text() {
            artifacts.push((format!("{}{}", base, ROLE_SUMMARIES_SUFFIX), text));
        }
        if let Some(text) = self.checklist_text() {
            artifacts.push((format!("{}{}", base, CHECKLIST_SUFFIX), text));
        }

        let mut written = Vec::with_capacity(artifacts.len());
        for (name, content) in artifacts {
            let path = dir.join(name);
            std::fs::write(&path, content)?;
            tracing::info!("[Export] wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

/// Format buckets the way the provider was asked to format them: a bold
/// role header per bucket, bullet lines for checklists, plain lines for
/// summaries.
fn format_buckets<'a>(
    buckets: impl Iterator<Item = &'a RoleBucket>,
    mode: SectionMode,
) -> String {
    let mut out = String::new();
    for bucket in buckets {
        out.push_str(&format!("**{}:**\n", bucket.display_name()));
        for line in &bucket.lines {
            match mode {
                SectionMode::Checklist => out.push_str(&format!("- {}\n", line)),
                SectionMode::RoleSummaries => {
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{bucketize, segment, Role};
    use tempfile::tempdir;

    const SCENARIO: &str = "SUMMARY:\nDoc is about X.\n\nROLE-WISE SUMMARIES:\n**WEB DEVELOPER:**\nBuilds the API layer.\n\nCHECKLIST:\n**WEB DEVELOPER:**\n- Build API\n- Write tests\n**PROJECT MANAGER:**\n- Plan sprint";

    #[test]
    fn plain_text_round_trips_through_the_segmenter() {
        let report = Report::from_raw_reply(SCENARIO).unwrap();
        let exported = report.to_plain_text();

        let segments = segment(&exported);
        assert_eq!(segments.summary, report.summary());

        let checklist = bucketize(
            segments.checklist.as_deref().unwrap(),
            SectionMode::Checklist,
        );
        assert_eq!(&checklist, report.checklist().unwrap());

        let summaries = bucketize(
            segments.role_summaries.as_deref().unwrap(),
            SectionMode::RoleSummaries,
        );
        assert_eq!(&summaries, report.role_summaries().unwrap());
    }

    #[test]
    fn round_trip_preserves_other_bucket_labels() {
        let raw = "SUMMARY:\nS.\n\nCHECKLIST:\n**LEGAL TEAM:**\n- Review the contract";
        let report = Report::from_raw_reply(raw).unwrap();

        let reparsed = Report::from_raw_reply(&report.to_plain_text()).unwrap();
        let bucket = &reparsed.checklist().unwrap()[&Role::Other];
        assert_eq!(bucket.display_name(), "LEGAL TEAM");
        assert_eq!(bucket.lines, vec!["Review the contract"]);
    }

    #[test]
    fn artifacts_are_named_from_the_document_base_name() {
        let report = Report::from_raw_reply(SCENARIO).unwrap();
        let dir = tempdir().unwrap();

        let written = report.export_artifacts("quarterly-plan.pdf", dir.path()).unwrap();
        let names: Vec<String> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            names,
            vec![
                "quarterly-plan_summary.txt",
                "quarterly-plan_role_summaries.txt",
                "quarterly-plan_checklist.txt",
            ]
        );
        for path in &written {
            assert!(path.exists());
        }
    }

    #[test]
    fn absent_sections_are_not_exported() {
        let report = Report::from_raw_reply("Just a summary, nothing else.").unwrap();
        let dir = tempdir().unwrap();

        let written = report.export_artifacts("notes.docx", dir.path()).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].ends_with("notes_summary.txt"));
    }

    #[test]
    fn display_markdown_uses_placeholders_for_absent_sections() {
        let report = Report::from_raw_reply("Only prose.").unwrap();
        let markdown = report.display_markdown();

        assert!(markdown.contains("# Summary"));
        assert!(markdown.contains("Only prose."));
        assert!(markdown.contains(NO_CONTENT));
    }

    #[test]
    fn checklist_renders_as_checkboxes() {
        let report = Report::from_raw_reply(SCENARIO).unwrap();
        let markdown = report.display_markdown();

        assert!(markdown.contains("- [ ] Build API"));
        assert!(markdown.contains("## Web Developer"));
    }
}
