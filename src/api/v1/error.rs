use crate::api::v1::handler::ApiResponse;
use crate::application_port::*;
use serde::Serialize;
use std::convert::Infallible;
use thiserror::Error;
use tracing::{debug, warn};
use warp::http::StatusCode;
use warp::{Rejection, reject};

pub async fn recover_error(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let code = if let Some(code) = err.find::<ApiErrorCode>() {
        code.clone()
    } else if err.find::<reject::InvalidQuery>().is_some() {
        debug!("rejected query: {:?}", err);
        ApiErrorCode::BadRequest
    } else if err.is_not_found() {
        ApiErrorCode::NotFound
    } else if err.find::<reject::MethodNotAllowed>().is_some() {
        ApiErrorCode::MethodNotAllowed
    } else {
        warn!("unhandled rejection: {:?}", err);
        ApiErrorCode::InternalError
    };

    let json = warp::reply::json(&ApiResponse::<()>::err(code.clone(), code.to_string()));
    Ok(warp::reply::with_status(json, code.status()))
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Error, Serialize, PartialEq, Eq)]
pub enum ApiErrorCode {
    #[error("Token Is Required")]
    MissingToken,
    #[error("Token Is Invalid")]
    InvalidToken,
    #[error("Bad Request")]
    BadRequest,
    #[error("Incompatible Gender")]
    IncompatibleGender,
    #[error("Already Liked")]
    AlreadyLiked,
    /// Lost an insert race against an identical like.
    #[error("Already Liked")]
    LikeConflict,
    #[error("Invalid Pagination")]
    InvalidPagination,
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Internal Server Error")]
    InternalError,
}

impl ApiErrorCode {
    pub fn internal<E: std::fmt::Display>(error: E) -> ApiErrorCode {
        warn!("Internal error: {}", error);
        ApiErrorCode::InternalError
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiErrorCode::MissingToken | ApiErrorCode::InvalidToken => StatusCode::UNAUTHORIZED,
            ApiErrorCode::BadRequest
            | ApiErrorCode::IncompatibleGender
            | ApiErrorCode::AlreadyLiked
            | ApiErrorCode::InvalidPagination => StatusCode::BAD_REQUEST,
            ApiErrorCode::LikeConflict => StatusCode::CONFLICT,
            ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl reject::Reject for ApiErrorCode {}

impl From<LikeError> for ApiErrorCode {
    fn from(error: LikeError) -> Self {
        match error {
            LikeError::MissingToken => ApiErrorCode::MissingToken,
            LikeError::InvalidToken => ApiErrorCode::InvalidToken,
            LikeError::UnknownTarget => ApiErrorCode::BadRequest,
            LikeError::IncompatibleGender => ApiErrorCode::IncompatibleGender,
            LikeError::AlreadyLiked => ApiErrorCode::AlreadyLiked,
            LikeError::InvalidPagination => ApiErrorCode::InvalidPagination,
            LikeError::Conflict(e) => {
                debug!("like insert conflict: {}", e);
                ApiErrorCode::LikeConflict
            }
            LikeError::Internal(e) => ApiErrorCode::internal(e),
        }
    }
}
