//! Text extraction from uploaded resume documents.
//!
//! The format is sniffed from the (path-stripped) filename extension, then
//! dispatched to a per-format extractor. PDF and DOCX parsing are synchronous
//! libraries, so those run under `spawn_blocking`.

mod docx;
mod pdf;
mod text;

use bytes::Bytes;
use thiserror::Error;

/// Errors that can occur while turning an upload into plain text.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    /// The document parsed but contained no usable text.
    #[error("No text could be extracted from the {0} file")]
    EmptyDocument(&'static str),

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("Failed to extract text from DOCX: {0}")]
    Docx(String),

    #[error("Extraction task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// Resume formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Txt,
    Pdf,
    Docx,
}

impl FileKind {
    /// Sniffs the format from a filename, case-insensitively, after
    /// discarding any path components a client smuggled into the name.
    pub fn from_filename(filename: &str) -> Option<FileKind> {
        let name = sanitize_filename(filename);
        let (_, ext) = name.rsplit_once('.')?;
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(FileKind::Txt),
            "pdf" => Some(FileKind::Pdf),
            "docx" => Some(FileKind::Docx),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Txt => "txt",
            FileKind::Pdf => "pdf",
            FileKind::Docx => "docx",
        }
    }
}

/// Reduces a client-supplied filename to its final component, so a name like
/// `../../etc/passwd.txt` is classified by `passwd.txt` alone.
pub fn sanitize_filename(filename: &str) -> &str {
    filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim()
}

/// A resume document as received from the transport layer.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Bytes,
}

/// Extracts plain text from an uploaded document based on its extension.
pub async fn extract_text(doc: UploadedDocument) -> Result<String, ExtractError> {
    let kind = FileKind::from_filename(&doc.filename).ok_or_else(|| {
        let name = sanitize_filename(&doc.filename);
        let ext = name.rsplit_once('.').map(|(_, e)| e.to_string()).unwrap_or_default();
        ExtractError::UnsupportedFormat(ext)
    })?;

    match kind {
        FileKind::Txt => text::extract(&doc.bytes),
        FileKind::Pdf => {
            let bytes = doc.bytes;
            tokio::task::spawn_blocking(move || pdf::extract(&bytes)).await?
        }
        FileKind::Docx => {
            let bytes = doc.bytes;
            tokio::task::spawn_blocking(move || docx::extract(&bytes)).await?
        }
    }
}
