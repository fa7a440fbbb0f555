use super::types::ComparatorError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    Shape,
    Input,
    Storage,
}

#[derive(Debug, Clone)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub kind: ErrorKind,
}

impl ComparatorError {
    /// Classify this error by the layer it originated in.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            ComparatorError::Config(_) => ErrorClassification {
                error_type: "ConfigError",
                kind: ErrorKind::Configuration,
            },
            ComparatorError::Yaml(_) => ErrorClassification {
                error_type: "YamlError",
                kind: ErrorKind::Configuration,
            },

            ComparatorError::Network(_) => ErrorClassification {
                error_type: "NetworkError",
                kind: ErrorKind::Transport,
            },
            ComparatorError::Timeout(_) => ErrorClassification {
                error_type: "TimeoutError",
                kind: ErrorKind::Transport,
            },
            ComparatorError::HttpStatus { .. } => ErrorClassification {
                error_type: "HttpStatusError",
                kind: ErrorKind::Transport,
            },

            ComparatorError::Shape(_) => ErrorClassification {
                error_type: "ShapeError",
                kind: ErrorKind::Shape,
            },

            ComparatorError::InvalidPrompt(_) => ErrorClassification {
                error_type: "InvalidPromptError",
                kind: ErrorKind::Input,
            },
            ComparatorError::UnknownModel(_) => ErrorClassification {
                error_type: "UnknownModelError",
                kind: ErrorKind::Input,
            },

            ComparatorError::Io(_) => ErrorClassification {
                error_type: "IoError",
                kind: ErrorKind::Storage,
            },
            ComparatorError::Json(_) => ErrorClassification {
                error_type: "JsonError",
                kind: ErrorKind::Storage,
            },
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.classify().kind {
            ErrorKind::Configuration | ErrorKind::Input => 2,
            ErrorKind::Storage => 3,
            ErrorKind::Transport | ErrorKind::Shape => 1,
        }
    }
}
