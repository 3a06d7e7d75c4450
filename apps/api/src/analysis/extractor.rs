//! Document text extraction.
//!
//! Extractors never fail: any decode problem yields an empty string, which the
//! pipeline reports as a uniform `{success: false, error}` result.

use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> String;
}

/// PDF extraction via `pdf-extract`.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> String {
        if bytes.is_empty() {
            return String::new();
        }

        // pdf-extract panics on some malformed documents instead of returning Err.
        match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(bytes)))
        {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("PDF extraction error: {e}");
                String::new()
            }
            Err(_) => {
                warn!("PDF extraction panicked on a {} byte document", bytes.len());
                String::new()
            }
        }
    }
}

/// Treats the upload as UTF-8 text. Invalid sequences are replaced.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
