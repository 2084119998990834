use crate::errors::ApiError;

/// Extracts text from raw PDF bytes.
///
/// Page texts are concatenated in document order with no separator between
/// pages. The extractor emits a newline pair before the first page's text;
/// that artifact is trimmed so the prompt embeds the document text itself.
/// The bytes are consumed once and never stored.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ApiError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ApiError::PdfExtract(e.to_string()))?;

    Ok(text.trim_start().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a minimal two-page PDF, one Helvetica text run per page.
    /// Cross-reference offsets are computed from actual byte positions.
    fn two_page_pdf(first: &str, second: &str) -> Vec<u8> {
        fn content_stream(text: &str) -> String {
            let ops = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
            format!("<< /Length {} >>\nstream\n{ops}\nendstream", ops.len())
        }

        let page = |contents: u32| {
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 7 0 R >> >> /Contents {contents} 0 R >>"
            )
        };

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R 4 0 R] /Count 2 >>".to_string(),
            page(5),
            page(6),
            content_stream(first),
            content_stream(second),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];

        let mut buf: Vec<u8> = Vec::new();
        let mut offsets = Vec::new();

        buf.extend_from_slice(b"%PDF-1.4\n");
        for (i, body) in objects.iter().enumerate() {
            offsets.push(buf.len());
            buf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_offset = buf.len();
        buf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        buf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets {
            buf.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        buf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );

        buf
    }

    #[test]
    fn two_page_text_concatenates_in_order_without_separator() {
        let pdf = two_page_pdf("Hello ", "World");
        let text = extract_pdf_text(&pdf).unwrap();
        assert_eq!(text, "Hello World");
    }

    #[test]
    fn leading_extractor_artifact_is_trimmed() {
        let pdf = two_page_pdf("Alpha", "Beta");
        let text = extract_pdf_text(&pdf).unwrap();
        assert!(text.starts_with("Alpha"));
    }

    #[test]
    fn garbage_bytes_are_rejected_with_a_parser_message() {
        let err = extract_pdf_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ApiError::PdfExtract(_)));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(extract_pdf_text(&[]).is_err());
    }
}
