/// Multipart field carrying the document.
pub const FILE_FIELD: &str = "file";
/// Name used when neither the file nor the caller supplies one.
pub const FALLBACK_FILENAME: &str = "summary.txt";
pub const SUMMARY_CONTENT_TYPE: &str = "text/plain";
pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Binary input. A payload with a `name` behaves like an uploaded file;
/// without one it is an anonymous blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePayload {
    pub bytes: Vec<u8>,
    pub name: Option<String>,
    pub content_type: Option<String>,
}

impl FilePayload {
    pub fn named(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            name: Some(name.into()),
            content_type: None,
        }
    }

    pub fn blob(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
            name: None,
            content_type: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionRequest {
    pub file: Option<FilePayload>,
    pub filename: Option<String>,
    pub raw_summary: Option<String>,
    pub base_url_override: Option<String>,
}

/// The single `file` part of a submission body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SubmissionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: FilePayload) -> Self {
        self.file = Some(file);
        self
    }

    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    pub fn with_raw_summary(mut self, summary: impl Into<String>) -> Self {
        self.raw_summary = Some(summary.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url_override = Some(base_url.into());
        self
    }

    /// Picks the part to upload: the file first, then a non-blank summary,
    /// otherwise nothing.
    pub fn attachment(&self) -> Option<Attachment> {
        if let Some(file) = &self.file {
            let file_name = file
                .name
                .as_deref()
                .or(self.filename.as_deref().filter(|name| !name.is_empty()))
                .unwrap_or(FALLBACK_FILENAME)
                .to_string();
            return Some(Attachment {
                file_name,
                content_type: file
                    .content_type
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CONTENT_TYPE.to_string()),
                bytes: file.bytes.clone(),
            });
        }

        let summary = self
            .raw_summary
            .as_deref()
            .filter(|text| !text.trim().is_empty())?;
        Some(Attachment {
            file_name: FALLBACK_FILENAME.to_string(),
            content_type: SUMMARY_CONTENT_TYPE.to_string(),
            bytes: summary.as_bytes().to_vec(),
        })
    }
}
