use std::fmt::Debug;

pub mod goals;

#[derive(Debug)]
pub enum UseCaseError {
    BadRequest(String),          // 400
    NotFound(String),            // 404
    InternalServerError(String), // 500
    BadGateway(String),          // 502
    ServiceUnavailable(String),  // 503
}

pub(crate) fn error_500(e: impl Debug) -> UseCaseError {
    UseCaseError::InternalServerError(format!("{:?}", e))
}
