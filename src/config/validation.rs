use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must look like an http(s) URL or a host name
/// - HTTP timeout and cache TTL must be greater than zero
/// - If a log file path is provided it cannot be empty, and its parent
///   directory must exist or be creatable
pub fn validate_config(
    api_base_url: &str,
    log_file_path: &Option<String>,
    http_timeout_seconds: u64,
    cache_ttl_seconds: u64,
) -> Result<(), AppError> {
    if api_base_url.trim().is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        // Without a scheme it should at least look like a host
        if !api_base_url.contains('.') && !api_base_url.starts_with("localhost") {
            return Err(AppError::config_error(
                "API base URL must be a valid URL or host name",
            ));
        }
    }

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if cache_ttl_seconds == 0 {
        return Err(AppError::config_error(
            "Cache TTL must be at least one second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
