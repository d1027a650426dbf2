use crate::utils::error::{Result, VersionTagError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(VersionTagError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(VersionTagError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(VersionTagError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Output names end up on the left of a `name=value` line.
pub fn validate_output_key(field_name: &str, key: &str) -> Result<()> {
    validate_non_empty_string(field_name, key)?;

    if let Some(bad) = key.chars().find(|c| *c == '=' || *c == '\n' || *c == '\r') {
        return Err(VersionTagError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: format!("Output key cannot contain {:?}", bad),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("paths.plist", "ios/Info.plist").is_ok());
        assert!(validate_path("paths.plist", "").is_err());
        assert!(validate_path("paths.plist", "ios/\0Info.plist").is_err());
    }

    #[test]
    fn test_validate_output_key() {
        assert!(validate_output_key("outputs.ios_key", "ios_version").is_ok());
        assert!(validate_output_key("outputs.ios_key", "   ").is_err());
        assert!(validate_output_key("outputs.ios_key", "ios=version").is_err());
        assert!(validate_output_key("outputs.ios_key", "ios\nversion").is_err());
    }
}
