//! UI state - status line, layout spacing and the loading flag

/// UI state that is not part of the record itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Message displayed in the status line
    pub status_message: String,
    /// Extra spacing above the navigation bar
    pub upper_space: bool,
    /// Whether an upload is being read
    pub is_loading: bool,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }
}
