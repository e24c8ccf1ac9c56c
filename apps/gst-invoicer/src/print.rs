//! # Print Hand-off
//!
//! The preview's "Print" action passes the rendered document to whatever
//! print facility the host provides, then forgets about it.
//!
//! ```text
//! print_invoice ──► render_print (HTML + window.print()) ──► PrintHost::print
//!                                                                 │
//!                                        FilePrintHost ◄──────────┘
//!                                        (writes the page; the browser
//!                                         opening it shows the dialog)
//! ```
//!
//! No content is inspected or changed on the way, and there is no retry.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::render::RenderedDocument;

// =============================================================================
// Print Host Trait
// =============================================================================

/// A print facility the preview can hand documents to.
pub trait PrintHost {
    /// Submits `doc` for printing.
    fn print(&self, doc: &RenderedDocument) -> Result<PrintReceipt, AppError>;
}

/// What the host reports back after accepting a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintReceipt {
    /// Where the document went (a file path for `FilePrintHost`).
    pub destination: String,

    /// Size of the submitted document.
    pub bytes: usize,
}

// =============================================================================
// File Print Host
// =============================================================================

/// Writes the printable page to a file.
///
/// Opening that file in a browser triggers the print dialog.
#[derive(Debug, Clone)]
pub struct FilePrintHost {
    path: PathBuf,
}

impl FilePrintHost {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FilePrintHost { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintHost for FilePrintHost {
    fn print(&self, doc: &RenderedDocument) -> Result<PrintReceipt, AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, doc.body.as_bytes())?;

        let destination = self.path.display().to_string();
        info!(title = %doc.title, destination = %destination, "Invoice sent to print");

        Ok(PrintReceipt {
            destination,
            bytes: doc.body.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::OutputFormat;

    fn doc() -> RenderedDocument {
        RenderedDocument {
            title: "TAX INVOICE 000001".to_string(),
            format: OutputFormat::Html,
            body: "<html>₹236.00</html>".to_string(),
        }
    }

    #[test]
    fn test_file_print_host_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("invoice.html");
        let host = FilePrintHost::new(&path);

        let receipt = host.print(&doc()).unwrap();
        assert_eq!(receipt.bytes, doc().body.len());
        assert_eq!(receipt.destination, path.display().to_string());
        assert_eq!(fs::read_to_string(&path).unwrap(), doc().body);
    }

    #[test]
    fn test_file_print_host_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be overwritten as a file
        let host = FilePrintHost::new(dir.path());
        let err = host.print(&doc()).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::IoError);
    }
}
