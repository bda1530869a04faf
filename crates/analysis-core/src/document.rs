//! Uploaded invoice documents.

/// MIME type assumed when the upload does not declare one.
pub const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// An uploaded invoice file (image or PDF).
#[derive(Debug, Clone, Default)]
pub struct InvoiceDocument {
    /// Raw file contents.
    pub bytes: Vec<u8>,
    /// Declared MIME type, if any.
    pub content_type: Option<String>,
    /// Original file name, if any.
    pub file_name: Option<String>,
}

impl InvoiceDocument {
    /// Create a document from raw bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            ..Default::default()
        }
    }

    /// Set the declared MIME type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the original file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// MIME type to send upstream, falling back to [`DEFAULT_MIME_TYPE`].
    pub fn mime_type(&self) -> &str {
        self.content_type
            .as_deref()
            .filter(|ct| !ct.trim().is_empty())
            .unwrap_or(DEFAULT_MIME_TYPE)
    }

    /// Size of the document in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the document has no content.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Check if this is an image document.
    pub fn is_image(&self) -> bool {
        self.mime_type().starts_with("image/")
    }
}
