//! The in-memory report model: segmented, bucketized summarization results.
//!
//! A [`Report`] is assembled once, from one raw provider reply, and is the
//! single source of truth for rendering and export. Each section is either
//! fully populated or absent; a report is never exposed mid-parse.

pub mod export;
pub mod roles;
pub mod segment;

pub use roles::{bucketize, Role, RoleBucket, SectionMode};
pub use segment::{segment, Segments};

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Error, Result};

/// Structured result of one pipeline run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    summary: String,
    role_summaries: Option<BTreeMap<Role, RoleBucket>>,
    checklist: Option<BTreeMap<Role, RoleBucket>>,
}

/// Buckets for one role across both role-based sections.
#[derive(Debug, Clone, Copy)]
pub struct RoleContent<'a> {
    pub summary: Option<&'a RoleBucket>,
    pub checklist: Option<&'a RoleBucket>,
}

impl Report {
    /// Assemble a report from a raw provider reply.
    ///
    /// Absent or unparseable sections degrade to `None`; only a reply that
    /// yields no summary and no buckets at all is a malformed report.
    pub fn from_raw_reply(raw: &str) -> Result<Self> {
        let segments = segment(raw);

        let role_summaries = segments
            .role_summaries
            .as_deref()
            .map(|text| bucketize(text, SectionMode::RoleSummaries))
            .filter(|buckets| !buckets.is_empty());

        let checklist = segments
            .checklist
            .as_deref()
            .map(|text| bucketize(text, SectionMode::Checklist))
            .filter(|buckets| !buckets.is_empty());

        let report = Self {
            summary: segments.summary,
            role_summaries,
            checklist,
        };

        if report.summary.is_empty()
            && report.role_summaries.is_none()
            && report.checklist.is_none()
        {
            return Err(Error::MalformedReport);
        }

        tracing::debug!(
            "[Report] assembled: summary {} chars, {} summary roles, {} checklist roles",
            report.summary.len(),
            report.role_summaries.as_ref().map(|m| m.len()).unwrap_or(0),
            report.checklist.as_ref().map(|m| m.len()).unwrap_or(0),
        );

        Ok(report)
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn role_summaries(&self) -> Option<&BTreeMap<Role, RoleBucket>> {
        self.role_summaries.as_ref()
    }

    pub fn checklist(&self) -> Option<&BTreeMap<Role, RoleBucket>> {
        self.checklist.as_ref()
    }

    pub fn has_role_summaries(&self) -> bool {
        self.role_summaries.is_some()
    }

    pub fn has_checklist(&self) -> bool {
        self.checklist.is_some()
    }

    /// All roles present in either role-based section, in display order.
    pub fn all_roles(&self) -> Vec<Role> {
        let mut roles: Vec<Role> = self
            .role_summaries
            .iter()
            .chain(self.checklist.iter())
            .flat_map(|buckets| buckets.keys().copied())
            .collect();
        roles.sort();
        roles.dedup();
        roles
    }

    /// Buckets for one role across both sections.
    pub fn bucket_for(&self, role: Role) -> RoleContent<'_> {
        RoleContent {
            summary: self.role_summaries.as_ref().and_then(|m| m.get(&role)),
            checklist: self.checklist.as_ref().and_then(|m| m.get(&role)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = "SUMMARY:\nDoc is about X.\n\nCHECKLIST:\n**WEB DEVELOPER:**\n- Build API\n- Write tests\n**PROJECT MANAGER:**\n- Plan sprint";

    #[test]
    fn scenario_reply_builds_expected_buckets() {
        let report = Report::from_raw_reply(SCENARIO).unwrap();

        assert_eq!(report.summary(), "Doc is about X.");
        assert!(!report.has_role_summaries());
        assert!(report.has_checklist());

        let checklist = report.checklist().unwrap();
        assert_eq!(
            checklist[&Role::WebDeveloper].lines,
            vec!["Build API", "Write tests"]
        );
        assert_eq!(checklist[&Role::ProjectManager].lines, vec!["Plan sprint"]);
    }

    #[test]
    fn unmarked_reply_is_summary_only() {
        let report = Report::from_raw_reply("Just prose, no structure.").unwrap();

        assert_eq!(report.summary(), "Just prose, no structure.");
        assert!(!report.has_role_summaries());
        assert!(!report.has_checklist());
        assert!(report.all_roles().is_empty());
    }

    #[test]
    fn empty_reply_is_malformed() {
        let err = Report::from_raw_reply("   \n  ").unwrap_err();
        assert!(matches!(err, Error::MalformedReport));
    }

    #[test]
    fn checklist_with_no_buckets_collapses_to_absent() {
        // Marker present, but nothing bucketizable under it.
        let report = Report::from_raw_reply("SUMMARY:\nFine.\n\nCHECKLIST:\nno bullets here").unwrap();

        assert!(!report.has_checklist());
    }

    #[test]
    fn all_roles_unions_both_sections_in_display_order() {
        let raw = "SUMMARY:\nS.\n\nROLE-WISE SUMMARIES:\n**PROJECT MANAGER:**\nRuns things.\n\nCHECKLIST:\n**WEB DEVELOPER:**\n- Build API";
        let report = Report::from_raw_reply(raw).unwrap();

        assert_eq!(
            report.all_roles(),
            vec![Role::WebDeveloper, Role::ProjectManager]
        );

        let content = report.bucket_for(Role::ProjectManager);
        assert!(content.summary.is_some());
        assert!(content.checklist.is_none());
    }
}
