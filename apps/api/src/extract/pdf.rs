//! PDF text extraction via `pdf-extract`.

use super::ExtractError;

/// Pulls the text layer out of a PDF. Page iteration and page separation
/// happen inside `pdf-extract`; scanned, image-only documents come back
/// empty and are rejected here.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let extracted = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractError::Pdf(e.to_string()))?;

    let text = extracted.trim();
    if text.is_empty() {
        return Err(ExtractError::EmptyDocument("PDF"));
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a minimal one-page PDF with `text` drawn in Helvetica. Object
    /// offsets in the xref table are computed, not hardcoded, so the file is
    /// structurally valid.
    fn minimal_pdf(text: &str) -> Vec<u8> {
        let stream = format!("BT /F1 24 Tf 72 720 Td ({text}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
                .to_string(),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
            format!("<< /Length {} >>\nstream\n{}\nendstream", stream.len(), stream),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{}\nendobj\n", i + 1, body));
        }

        let xref_offset = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n", objects.len() + 1));
        pdf.push_str("0000000000 65535 f \n");
        for offset in &offsets {
            pdf.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_offset
        ));
        pdf.into_bytes()
    }

    #[test]
    fn test_extracts_text_layer() {
        let pdf = minimal_pdf("Hello from a resume");
        let text = extract(&pdf).unwrap();
        assert!(text.contains("Hello from a resume"), "got: {text:?}");
    }

    #[test]
    fn test_garbage_bytes_are_a_parse_error() {
        let err = extract(b"this is not a pdf at all").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_)));
    }
}
