use std::fmt::Debug;

use actix_web::{
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
    Error, HttpRequest, HttpResponse,
};
use serde::{Deserialize, Serialize};
use tracing::{event, Level};

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

///Bad Request
pub fn response_400(error_message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// NotFound
pub fn response_404(error_message: &str) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Internal Server Error: with logging
pub fn response_500<T: Debug>(e: T) -> HttpResponse {
    event!(target: "backend", Level::ERROR, "{:?}", e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: "Some unexpected error happened. Please try again later.".to_string(),
    })
}

/// Bad Gateway: an upstream service failed.
pub fn response_502(error_message: &str) -> HttpResponse {
    HttpResponse::BadGateway().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Service Unavailable
pub fn response_503(error_message: &str) -> HttpResponse {
    HttpResponse::ServiceUnavailable().json(ErrorResponse {
        error: error_message.to_string(),
    })
}

/// Extractor rejections answered with the same `ErrorResponse` body as handlers.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> Error {
    let res = response_400(&err.to_string());
    InternalError::from_response(err, res).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> Error {
    let res = response_400(&err.to_string());
    InternalError::from_response(err, res).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> Error {
    let res = response_404("Goal with this id was not found");
    InternalError::from_response(err, res).into()
}
