//! DOCX text extraction via docx-rs.

use crate::error::{Error, Result};

/// Extract the raw textual content of a DOCX payload.
///
/// Structure is preserved only as plain text: one line per paragraph, table
/// cells joined with " | ". No trimming beyond what the walk produces.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let doc = docx_rs::read_docx(bytes)
        .map_err(|e| Error::ExtractionFailure(format!("DOCX decode failed: {}", e)))?;

    let mut text = String::new();
    for child in &doc.document.children {
        collect_text(child, &mut text);
    }

    Ok(text)
}

/// Recursively collect text from document body elements.
fn collect_text(element: &docx_rs::DocumentChild, output: &mut String) {
    match element {
        docx_rs::DocumentChild::Paragraph(para) => {
            for child in &para.children {
                collect_paragraph_child(child, output);
            }
            output.push('\n');
        }
        docx_rs::DocumentChild::Table(table) => {
            for row in &table.rows {
                let docx_rs::TableChild::TableRow(tr) = row;
                for cell in &tr.cells {
                    let docx_rs::TableRowChild::TableCell(tc) = cell;
                    for content in &tc.children {
                        if let docx_rs::TableCellContent::Paragraph(para) = content {
                            for child in &para.children {
                                collect_paragraph_child(child, output);
                            }
                            output.push_str(" | ");
                        }
                    }
                }
                output.push('\n');
            }
        }
        _ => {}
    }
}

fn collect_paragraph_child(child: &docx_rs::ParagraphChild, output: &mut String) {
    match child {
        docx_rs::ParagraphChild::Run(run) => {
            for run_child in &run.children {
                if let docx_rs::RunChild::Text(text) = run_child {
                    output.push_str(&text.text);
                }
            }
        }
        docx_rs::ParagraphChild::Hyperlink(link) => {
            for nested in &link.children {
                collect_paragraph_child(nested, output);
            }
        }
        _ => {}
    }
}
