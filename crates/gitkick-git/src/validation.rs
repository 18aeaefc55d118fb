use crate::errors::GitError;

/// Validate a user-supplied git argument (branch, remote) to prevent injection.
///
/// Rejects empty values, values that start with `-` (option injection), values
/// containing control characters, and `::` sequences (refspec injection).
pub fn validate_git_arg(value: &str, label: &str) -> Result<(), GitError> {
    let invalid = |message: String| GitError::InvalidArgument {
        label: label.to_string(),
        message,
    };

    if value.trim().is_empty() {
        return Err(invalid("must not be empty".to_string()));
    }
    if value.starts_with('-') {
        return Err(invalid(format!("'{value}' must not start with '-'")));
    }
    if value.chars().any(|c| c.is_control()) {
        return Err(invalid("contains control characters".to_string()));
    }
    if value.contains("::") {
        return Err(invalid("'::' sequences are not allowed".to_string()));
    }
    Ok(())
}
