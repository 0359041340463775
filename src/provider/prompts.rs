//! Prompt construction for the summarization request.
//!
//! One instruction prompt asks for three logically distinct outputs in a
//! single round-trip, each under a literal marker label the segmenter can
//! locate afterwards.

use crate::report::segment::{CHECKLIST_MARKER, ROLE_SUMMARIES_MARKER, SUMMARY_MARKER};

use super::TargetLength;

const DETAILED_INSTRUCTIONS: &str = r#"in a comprehensive, detailed analysis with the following structure:

**EXECUTIVE SUMMARY**
- Brief overview of the document, its purpose and scope

**KEY FINDINGS & INSIGHTS**
- Most important discoveries, critical data points and trends

**TECH STACK & TECHNICAL ARCHITECTURE**
- Technologies, frameworks, platforms and dependencies mentioned

**PROJECT FLOW & PROCESSES**
- Workflows, step-by-step procedures and system interactions

**CONCLUSIONS & RECOMMENDATIONS**
- What the findings mean and what should be done about them

Use bullet points and subheadings throughout, with specific examples from the document"#;

const ROLE_SUMMARY_INSTRUCTIONS: &str = r#"For each role that the document is relevant to, write a short paragraph describing what the document means for that role. Structure it as follows:

**WEB DEVELOPER:**
[What developers need to know]

**GRAPHIC DESIGNER:**
[What designers need to know]

**PROJECT MANAGER:**
[What managers need to know]

**BUSINESS STAKEHOLDER:**
[What the business side needs to know]

**OTHER ROLES:**
[Anything relevant to other roles]

Only include roles the document actually concerns."#;

const CHECKLIST_INSTRUCTIONS: &str = r#"Extract a separate actionable checklist organized by roles and responsibilities. Structure it as follows:

**WEB DEVELOPER:**
- [Specific development tasks]
- [Technical implementation items]

**GRAPHIC DESIGNER:**
- [Design-related tasks]
- [Visual elements to create]

**PROJECT MANAGER:**
- [Project coordination tasks]
- [Management activities]

**TOOLS & TECHNOLOGIES:**
- [Required tools and software]
- [Technical requirements]

**OTHER ROLES:**
- [Any other relevant roles and their tasks]

Format each section with bullet points for specific, actionable items."#;

/// Build the single instruction prompt for one summarization request.
pub fn build_summary_prompt(text: &str, length: TargetLength) -> String {
    format!(
        "Please analyze the following document and provide three separate outputs:\n\n\
         1. {summary_marker} {length_instruction}. Focus on the main points, key findings, and important conclusions.\n\n\
         2. {roles_marker} {role_instructions}\n\n\
         3. {checklist_marker} {checklist_instructions}\n\n\
         Please format your response as follows:\n\n\
         {summary_marker}\n[Your summary here]\n\n\
         {roles_marker}\n[Your role-wise summaries here]\n\n\
         {checklist_marker}\n[Your actionable checklist here]\n\n\
         Document content:\n{text}",
        summary_marker = SUMMARY_MARKER,
        roles_marker = ROLE_SUMMARIES_MARKER,
        checklist_marker = CHECKLIST_MARKER,
        length_instruction = length_instruction(length),
        role_instructions = ROLE_SUMMARY_INSTRUCTIONS,
        checklist_instructions = CHECKLIST_INSTRUCTIONS,
        text = text,
    )
}

fn length_instruction(length: TargetLength) -> &'static str {
    match length {
        TargetLength::Short => "in 2-3 sentences",
        TargetLength::Medium => "in one paragraph (4-6 sentences)",
        TargetLength::Long => "in 2-3 detailed paragraphs",
        TargetLength::Detailed => DETAILED_INSTRUCTIONS,
    }
}
