//! Error types for the generation engine.
//!
//! Provides an error enum for all engine operations including parameter
//! validation, scorer invocation, synthesis, and audio encoding.

use std::fmt;

/// Error codes matching the web layer's error contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Seed is not a string of at most 50 characters.
    InvalidSeed,
    /// Temperature outside the valid range (0.1-2.0).
    InvalidTemperature,
    /// Length outside the valid range (50-500) or not a multiple of 10.
    InvalidLength,
    /// The external scorer raised or returned a malformed distribution.
    ScorerFailed,
    /// Notation contained no parseable notes, nothing to synthesize.
    NoNotes,
    /// WAV encoding or file write failed.
    AudioWriteFailed,
}

impl ErrorCode {
    /// Returns the string code for error responses.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSeed => "INVALID_SEED",
            ErrorCode::InvalidTemperature => "INVALID_TEMPERATURE",
            ErrorCode::InvalidLength => "INVALID_LENGTH",
            ErrorCode::ScorerFailed => "SCORER_FAILED",
            ErrorCode::NoNotes => "NO_NOTES",
            ErrorCode::AudioWriteFailed => "AUDIO_WRITE_FAILED",
        }
    }

    /// Returns the HTTP status the web layer maps this code to.
    ///
    /// Validation failures are client errors (400); everything else is
    /// reported as a server-side failure (500).
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::InvalidSeed
            | ErrorCode::InvalidTemperature
            | ErrorCode::InvalidLength
            | ErrorCode::NoNotes => 400,
            ErrorCode::ScorerFailed | ErrorCode::AudioWriteFailed => 500,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for engine operations.
#[derive(Debug)]
pub struct EngineError {
    /// The error code category.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional context (offending value, file path, etc.).
    pub context: Option<String>,
}

impl EngineError {
    /// Creates a new EngineError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Creates a new EngineError with additional context.
    pub fn with_context(
        code: ErrorCode,
        message: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Seed failed validation.
    pub fn invalid_seed(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidSeed, reason)
    }

    /// Temperature outside the valid range.
    pub fn invalid_temperature(temperature: f32) -> Self {
        Self::with_context(
            ErrorCode::InvalidTemperature,
            format!("Temperature must be between 0.1 and 2.0, got {}", temperature),
            temperature.to_string(),
        )
    }

    /// Length outside the valid range or off the 10-step grid.
    pub fn invalid_length(reason: impl Into<String>, length: usize) -> Self {
        Self::with_context(ErrorCode::InvalidLength, reason, length.to_string())
    }

    /// Scorer invocation failed or produced a malformed distribution.
    pub fn scorer_failed(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::ScorerFailed, reason)
    }

    /// No parseable notes in the notation handed to the synthesizer.
    pub fn no_notes() -> Self {
        Self::new(ErrorCode::NoNotes, "No valid notes found in ABC notation")
    }

    /// WAV encoding failed.
    pub fn audio_write_failed(reason: impl Into<String>) -> Self {
        Self::new(ErrorCode::AudioWriteFailed, reason)
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, " (context: {})", ctx)?;
        }
        Ok(())
    }
}

impl std::error::Error for EngineError {}

/// Result type alias using EngineError.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_codes_are_client_errors() {
        assert_eq!(ErrorCode::InvalidSeed.http_status(), 400);
        assert_eq!(ErrorCode::InvalidTemperature.http_status(), 400);
        assert_eq!(ErrorCode::InvalidLength.http_status(), 400);
        assert_eq!(ErrorCode::NoNotes.http_status(), 400);
    }

    #[test]
    fn internal_codes_are_server_errors() {
        assert_eq!(ErrorCode::ScorerFailed.http_status(), 500);
        assert_eq!(ErrorCode::AudioWriteFailed.http_status(), 500);
    }

    #[test]
    fn display_includes_code_and_context() {
        let err = EngineError::invalid_temperature(3.5);
        let rendered = err.to_string();
        assert!(rendered.contains("INVALID_TEMPERATURE"));
        assert!(rendered.contains("3.5"));
    }
}
