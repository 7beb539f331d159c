use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Strips every character outside `[A-Za-z0-9._-]` from a report file name.
///
/// The configured name may come from an environment variable or a pipeline
/// variable and can contain spaces, path separators or shell metacharacters.
/// Only the retained character set is safe across the filesystems and CI
/// agents the report is written on.
///
/// # Errors
/// Returns an error if nothing remains after stripping.
pub fn sanitize_report_file_name(name: &str) -> Result<String> {
    let sanitized: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();

    if sanitized.is_empty() {
        return Err(ReportError::UnusableFileName {
            name: name.to_string(),
        }
        .into());
    }

    Ok(sanitized)
}

/// Validates that a path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_sanitize_keeps_plain_names() {
        let result = sanitize_report_file_name("security-report_v2.csv").unwrap();
        assert_eq!(result, "security-report_v2.csv");
    }

    #[test]
    fn test_sanitize_strips_spaces_and_symbols() {
        let result = sanitize_report_file_name("my report!.csv").unwrap();
        assert_eq!(result, "myreport.csv");
    }

    #[test]
    fn test_sanitize_strips_path_separators() {
        let result = sanitize_report_file_name("../../etc/passwd").unwrap();
        assert_eq!(result, "....etcpasswd");
    }

    #[test]
    fn test_sanitize_rejects_empty_result() {
        let result = sanitize_report_file_name("!?* ");
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("no usable characters"));
    }

    #[test]
    fn test_sanitize_rejects_empty_input() {
        assert!(sanitize_report_file_name("").is_err());
    }

    #[test]
    fn test_validate_not_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("report.csv");
        fs::write(&file_path, "test").unwrap();

        let result = validate_not_symlink(&file_path, "write");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_not_symlink_nonexistent() {
        let path = PathBuf::from("/nonexistent/report.csv");
        let result = validate_not_symlink(&path, "write");
        assert!(result.is_err());
    }
}
