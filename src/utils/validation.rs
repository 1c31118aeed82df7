use crate::utils::error::{CuratorError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CuratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CuratorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CuratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CuratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Rejects empty lists and blank entries. A blank substring would match every pin.
pub fn validate_terms(field_name: &str, terms: &[String]) -> Result<()> {
    if terms.is_empty() {
        return Err(CuratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "List cannot be empty".to_string(),
        });
    }

    for term in terms {
        if term.trim().is_empty() {
            return Err(CuratorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: term.clone(),
                reason: "Value cannot be empty or whitespace-only".to_string(),
            });
        }
    }
    Ok(())
}

/// Checks `min < value <= max`.
pub fn validate_ratio(field_name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if !(value > min && value <= max) {
        return Err(CuratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be greater than {} and at most {}", min, max),
        });
    }
    Ok(())
}
