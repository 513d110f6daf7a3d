use crate::application::TransportFailure;
use crate::domain::ClassifiedError;

/// Map a transport failure onto the error taxonomy shown to operators.
pub fn classify(failure: &TransportFailure) -> ClassifiedError {
    match failure {
        TransportFailure::Status { status, detail } => match status {
            429 => ClassifiedError::rate_limited(),
            401 => ClassifiedError::invalid_credential(),
            500 => ClassifiedError::upstream_server_error(),
            503 => ClassifiedError::upstream_unavailable(),
            _ => ClassifiedError::upstream_error(detail.as_deref()),
        },
        TransportFailure::NoResponse(_) => ClassifiedError::network_unreachable(),
        TransportFailure::Setup(detail) => ClassifiedError::request_setup(detail),
    }
}
