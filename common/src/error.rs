use thiserror::Error;

/// Failure of a call to the school API.
///
/// The create flow never shows these to the user; the listing page shows the Display text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, bad URL).
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16 },
    /// The response body could not be read as the expected JSON.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Maps an HTTP status to `Ok(())` for 2xx and `ApiError::Status` otherwise.
    pub fn check_status(status: u16) -> Result<(), ApiError> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(ApiError::Status { status })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn only_2xx_is_success() {
        assert_eq!(ApiError::check_status(200), Ok(()));
        assert_eq!(ApiError::check_status(201), Ok(()));
        assert_eq!(
            ApiError::check_status(500),
            Err(ApiError::Status { status: 500 })
        );
        assert_eq!(
            ApiError::check_status(304),
            Err(ApiError::Status { status: 304 })
        );
    }

    #[test]
    fn display_reads_as_a_reason() {
        assert_eq!(
            ApiError::Status { status: 404 }.to_string(),
            "server responded with status 404"
        );
        assert_eq!(
            ApiError::Transport("Failed to fetch".into()).to_string(),
            "network error: Failed to fetch"
        );
    }
}
