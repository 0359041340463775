//! Document intake to structured, navigable report.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │  1. EXTRACT: PDF/DOCX to plain text (pdf-extract, docx-rs)     │
//! │  2. SUMMARIZE: one prompt, one provider round-trip (reqwest)   │
//! │  3. SEGMENT: locate SUMMARY / ROLE-WISE SUMMARIES / CHECKLIST  │
//! │  4. BUCKETIZE: normalize role headers, collect lines per role  │
//! │  5. REPORT: immutable model → display / clipboard / files      │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The reply format is tolerant, not guaranteed: the provider is an
//! uncontrolled external system, so segmentation and bucketing are
//! best-effort parsers with explicit fallback rules rather than a strict
//! grammar.

pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod provider;
pub mod report;

pub use config::Config;
pub use document::{Document, DocumentKind};
pub use error::{Error, Result};
pub use pipeline::{Pipeline, Session};
pub use provider::{ProviderKind, SummaryProvider, SummaryRequestOptions, TargetLength};
pub use report::{Report, Role, RoleBucket};
