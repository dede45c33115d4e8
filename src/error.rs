//! API Error Taxonomy
//!
//! Every failed request is classified here and rendered to exactly one
//! user-visible message at the operation boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Server rejected the request (4xx other than 404)
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// Resource missing (404)
    #[error("{message}")]
    NotFound { message: String },

    /// Server fault (5xx)
    #[error("server error ({status})")]
    Server { status: u16 },

    /// No response received
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    /// Classify a non-2xx status, preferring the `{message}` the server
    /// put in the body.
    pub fn from_status(status: u16, body_message: Option<String>) -> Self {
        match status {
            404 => ApiError::NotFound {
                message: body_message.unwrap_or_else(|| "Not found".to_string()),
            },
            400..=499 => ApiError::Rejected {
                status,
                message: body_message.unwrap_or_else(|| "Invalid request".to_string()),
            },
            _ => ApiError::Server { status },
        }
    }

    /// Message shown in the notification surface. Rejections repeat the
    /// server's wording verbatim; faults get a generic string.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Rejected { message, .. } | ApiError::NotFound { message } => message.clone(),
            ApiError::Server { .. } => "Server error. Please try again later.".to_string(),
            ApiError::Network(_) => "Network error. Please check your connection.".to_string(),
        }
    }

    /// The list endpoint reports an empty contact book as a rejection
    /// with this exact message; callers treat it as a benign empty state.
    pub fn is_no_contacts(&self) -> bool {
        matches!(
            self,
            ApiError::Rejected { message, .. } | ApiError::NotFound { message }
                if message == "No contacts found"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes_map_to_variants() {
        assert!(matches!(
            ApiError::from_status(404, None),
            ApiError::NotFound { .. }
        ));
        assert!(matches!(
            ApiError::from_status(400, Some("bad".to_string())),
            ApiError::Rejected { status: 400, .. }
        ));
        assert!(matches!(
            ApiError::from_status(500, None),
            ApiError::Server { status: 500 }
        ));
    }

    #[test]
    fn rejection_messages_are_shown_verbatim() {
        let err = ApiError::from_status(401, Some("Invalid credentials".to_string()));
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn faults_get_generic_messages() {
        assert_eq!(
            ApiError::from_status(503, Some("ignored".to_string())).user_message(),
            "Server error. Please try again later."
        );
    }

    #[test]
    fn missing_body_message_falls_back() {
        assert_eq!(ApiError::from_status(400, None).user_message(), "Invalid request");
        assert_eq!(ApiError::from_status(404, None).user_message(), "Not found");
    }

    #[test]
    fn empty_contact_book_is_special_cased() {
        let err = ApiError::from_status(404, Some("No contacts found".to_string()));
        assert!(err.is_no_contacts());
        let err = ApiError::from_status(400, Some("No contacts found".to_string()));
        assert!(err.is_no_contacts());
        let err = ApiError::from_status(400, Some("something else".to_string()));
        assert!(!err.is_no_contacts());
    }
}
