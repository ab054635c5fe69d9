//! DOCX text extraction via `docx-rs`.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use super::ExtractError;

/// Reads a DOCX document and concatenates its paragraph text in document
/// order, one paragraph per line. Text inside hyperlinks is kept; tables,
/// headers and other non-paragraph content are skipped.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| ExtractError::Docx(e.to_string()))?;

    let mut lines: Vec<String> = Vec::new();
    for child in docx.document.children {
        if let DocumentChild::Paragraph(paragraph) = child {
            let line = paragraph_text(&paragraph);
            if !line.trim().is_empty() {
                lines.push(line);
            }
        }
    }

    let joined = lines.join("\n");
    let text = joined.trim();
    if text.is_empty() {
        return Err(ExtractError::EmptyDocument("DOCX"));
    }
    Ok(text.to_string())
}

fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        match child {
            ParagraphChild::Run(run) => append_run_text(&mut text, run),
            ParagraphChild::Hyperlink(link) => {
                for nested in &link.children {
                    if let ParagraphChild::Run(run) = nested {
                        append_run_text(&mut text, run);
                    }
                }
            }
            _ => {}
        }
    }
    text
}

fn append_run_text(text: &mut String, run: &docx_rs::Run) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => text.push_str(&t.text),
            RunChild::Tab(_) => text.push('\t'),
            RunChild::Break(_) => text.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};

    fn docx_bytes(docx: Docx) -> Vec<u8> {
        let mut buf = std::io::Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_extracts_paragraphs_in_order() {
        let bytes = docx_bytes(
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe")))
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Software Engineer"))),
        );
        assert_eq!(extract(&bytes).unwrap(), "Jane Doe\nSoftware Engineer");
    }

    #[test]
    fn test_blank_paragraphs_are_dropped() {
        let bytes = docx_bytes(
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Header")))
                .add_paragraph(Paragraph::new())
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Body"))),
        );
        assert_eq!(extract(&bytes).unwrap(), "Header\nBody");
    }

    #[test]
    fn test_document_with_no_text_is_an_error() {
        let bytes = docx_bytes(Docx::new().add_paragraph(Paragraph::new()));
        assert!(matches!(extract(&bytes).unwrap_err(), ExtractError::EmptyDocument(_)));
    }

    #[test]
    fn test_garbage_bytes_are_a_parse_error() {
        let err = extract(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, ExtractError::Docx(_)));
    }
}
