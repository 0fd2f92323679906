use dotenv::dotenv;
use std::env;

use crate::errors::AppError;

pub fn get_env_value_by_key(key: &str) -> Result<String, AppError> {
    dotenv().ok();

    env::var(key).map_err(|_| AppError::NotFound(format!("{} in env", key)))
}

/// Simulated fetch delay in milliseconds. Unset or unparsable values
/// fall back to no delay.
pub fn fetch_delay_ms() -> u64 {
    get_env_value_by_key("FETCH_DELAY_MS")
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn missing_key_reports_not_found() {
        let err = get_env_value_by_key("ADDRESS_BOOK_NO_SUCH_KEY").unwrap_err();

        assert_eq!(
            format!("{}", err),
            "ADDRESS_BOOK_NO_SUCH_KEY in env Not found"
        );
    }
}
