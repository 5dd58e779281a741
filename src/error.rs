use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

/// Every way a care lookup can fail.  Only `InvalidInput` and `NotFound`
/// put their details in the response body.
#[derive(Debug, thiserror::Error)]
pub enum CareError {
    #[error("plant name must not be empty")]
    InvalidInput,

    #[error("{0}")]
    NotFound(String),

    #[error("could not understand the model reply: {0:#}")]
    MalformedUpstreamResponse(anyhow::Error),

    #[error("language model call failed: {0:#}")]
    UpstreamFailure(anyhow::Error),
}

#[derive(Serialize, Debug)]
struct ErrorBody<'a> {
    detail: &'a str,
}

impl CareError {
    /// The message that is safe to show to a caller.
    pub fn detail(&self) -> &str {
        match self {
            CareError::InvalidInput => "plant name must not be empty",
            CareError::NotFound(message) => message,
            CareError::MalformedUpstreamResponse(_) => {
                "failed to process the language model response"
            }
            CareError::UpstreamFailure(_) => "internal server error",
        }
    }
}

impl ResponseError for CareError {
    fn status_code(&self) -> StatusCode {
        match self {
            CareError::InvalidInput => StatusCode::BAD_REQUEST,
            CareError::NotFound(_) => StatusCode::NOT_FOUND,
            CareError::MalformedUpstreamResponse(_) | CareError::UpstreamFailure(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: self.detail(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_status_codes() {
        assert_eq!(CareError::InvalidInput.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            CareError::NotFound(String::from("x")).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CareError::MalformedUpstreamResponse(anyhow!("x")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            CareError::UpstreamFailure(anyhow!("x")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_stay_internal() {
        let error = CareError::UpstreamFailure(anyhow!("connect timeout to 10.0.0.1"));

        assert!(error.to_string().contains("10.0.0.1"));
        assert!(!error.detail().contains("10.0.0.1"));
    }
}
