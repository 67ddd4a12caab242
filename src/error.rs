//! Storefront Errors
//!
//! Every failure in the shop is recovered locally: logged, shown in the
//! message popup, or shown inline in a form. Nothing here is fatal.

/// Common result type for shop operations
pub type ShopResult<T> = Result<T, ShopError>;

/// Shop-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum ShopError {
    /// A required DOM anchor could not be resolved
    MissingElement(String),
    /// A flight was requested while another one holds the guard
    GuardRejected,
    /// Empty cart at checkout or missing required form fields
    Validation(String),
    /// Demo auth failure (duplicate email, bad credentials)
    Auth(String),
    /// Local storage unavailable or payload could not be (de)serialized
    Storage(String),
}

impl std::fmt::Display for ShopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShopError::MissingElement(what) => write!(f, "Missing element: {}", what),
            ShopError::GuardRejected => write!(f, "Flight already in progress"),
            ShopError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            ShopError::Auth(msg) => write!(f, "{}", msg),
            ShopError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for ShopError {}

impl From<serde_json::Error> for ShopError {
    fn from(err: serde_json::Error) -> Self {
        ShopError::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_displays_bare_message() {
        let err = ShopError::Auth("Wrong email or password".to_string());
        assert_eq!(err.to_string(), "Wrong email or password");
    }

    #[test]
    fn test_json_error_maps_to_storage() {
        let err: ShopError = serde_json::from_str::<Vec<u32>>("{").unwrap_err().into();
        assert!(matches!(err, ShopError::Storage(_)));
    }
}
