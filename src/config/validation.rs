use crate::config::types::{Config, CrawlerConfig, LocaleConfig, UserAgentConfig};
use crate::url::parse_http_url;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_locale_config(&config.locale)?;
    Ok(())
}

/// Lowercases the configured locale priority so it compares equal to hreflang keys
pub fn normalize(config: &mut Config) {
    for locale in &mut config.locale.priority {
        *locale = locale.trim().to_lowercase();
    }
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    parse_http_url(&config.root_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid root-url: {}", e)))?;

    if !config.base_path.is_empty() && !config.base_path.starts_with('/') {
        return Err(ConfigError::Validation(format!(
            "base-path must be empty or start with '/', got '{}'",
            config.base_path
        )));
    }

    if config.request_timeout < 1 || config.request_timeout > 300 {
        return Err(ConfigError::Validation(format!(
            "request-timeout must be between 1 and 300 seconds, got {}",
            config.request_timeout
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler-name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    if config.crawler_version.trim().is_empty() {
        return Err(ConfigError::Validation(
            "crawler-version cannot be empty".to_string(),
        ));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;

    Ok(())
}

/// Validates locale configuration
fn validate_locale_config(config: &LocaleConfig) -> Result<(), ConfigError> {
    if let Some(entry) = config.priority.iter().find(|entry| entry.trim().is_empty()) {
        return Err(ConfigError::Validation(format!(
            "locale priority entries cannot be empty, got '{}'",
            entry
        )));
    }

    if let Some(name) = &config.param_name {
        if name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '=' | '&' | '?' | '#'))
        {
            return Err(ConfigError::Validation(format!(
                "param-name must be a bare query parameter name, got '{}'",
                name
            )));
        }
    }

    Ok(())
}
