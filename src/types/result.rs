//! GenerationResult entity representing a completed generation.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use super::GenerationParams;

/// A completed generation: the notation text, when it finished, and the
/// validated parameters that produced it.
///
/// Created fresh per request and immutable once returned. Persistence, if
/// any, is an external collaborator's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// The generated ABC notation.
    pub notation: String,

    /// Instant the generation completed.
    pub timestamp: SystemTime,

    /// Echo of the validated request parameters.
    pub parameters: GenerationParams,
}

impl GenerationResult {
    /// Wraps finished notation with a completion timestamp.
    pub fn new(notation: String, parameters: GenerationParams) -> Self {
        Self {
            notation,
            timestamp: SystemTime::now(),
            parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_echoes_parameters() {
        let params = GenerationParams::new("", 1.0, 200).unwrap();
        let result = GenerationResult::new("X:1\n".to_string(), params.clone());
        assert_eq!(result.parameters, params);
        assert_eq!(result.notation, "X:1\n");
        assert!(result.timestamp <= SystemTime::now());
    }
}
