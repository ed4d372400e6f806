use thiserror::Error;

/// Everything that can end a submission without a result.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProcessError {
    #[error("Pilih file citra terlebih dahulu.")]
    NoFileSelected,

    #[error("{0}")]
    Network(String),

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Decode(String),
}

impl ProcessError {
    /// Builds the error for a non-2xx response. The server's own `error`
    /// field wins, then the HTTP status text, then a generic status line.
    pub fn from_server(status: u16, status_text: &str, error_field: Option<String>) -> Self {
        let message = error_field
            .filter(|m| !m.trim().is_empty())
            .or_else(|| {
                let text = status_text.trim();
                (!text.is_empty()).then(|| text.to_string())
            })
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));

        ProcessError::Server { status, message }
    }

    /// Text shown in the error area.
    pub fn user_message(&self) -> String {
        match self {
            ProcessError::NoFileSelected => self.to_string(),
            other => format!("Terjadi kesalahan: {}.", other),
        }
    }
}
