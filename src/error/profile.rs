//! Profile validation and mutation errors

use super::ProfileError;

/// Creates a schema validation error at a JSON pointer
pub fn validation(path: impl Into<String>, message: impl Into<String>) -> ProfileError {
    ProfileError::Validation {
        path: path.into(),
        message: message.into(),
    }
}

/// Creates a YAML syntax error
pub fn yaml_syntax(line: usize, column: usize, message: impl Into<String>) -> ProfileError {
    ProfileError::YamlSyntax {
        line,
        column,
        message: message.into(),
    }
}

/// Creates a gating error for a sub-option whose feature is off
pub fn gating(name: impl Into<String>, parent: impl Into<String>) -> ProfileError {
    ProfileError::Gating {
        name: name.into(),
        parent: parent.into(),
    }
}
