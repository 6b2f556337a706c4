//! Server-side image handles for the current browser session.

/// Handles assigned by the server for the uploaded image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current_file_name: Option<String>,
    processed_file_name: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start working on a freshly uploaded image, replacing any previous one.
    pub fn begin(&mut self, file_name: impl Into<String>) {
        self.current_file_name = Some(file_name.into());
        self.processed_file_name = None;
    }

    /// Forget the current image.
    pub fn clear(&mut self) {
        self.current_file_name = None;
        self.processed_file_name = None;
    }

    /// Handle of the uploaded image, if any.
    pub fn current_file_name(&self) -> Option<&str> {
        self.current_file_name.as_deref()
    }

    /// Handle of the last processed image. Not assigned by any flow yet.
    pub fn processed_file_name(&self) -> Option<&str> {
        self.processed_file_name.as_deref()
    }

    /// Whether an image has been uploaded.
    pub fn is_active(&self) -> bool {
        self.current_file_name.is_some()
    }
}
