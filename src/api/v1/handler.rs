use super::error::*;
use crate::application_port::LikeService;
use crate::domain_model::{LikeView, UserId};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use warp::{self, reject};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(code: ApiErrorCode, message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(ApiError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SendLikeResponse {
    pub receiver_id: UserId,
}

pub async fn send_like(
    target: String,
    token: String,
    like_service: Arc<dyn LikeService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    // Parsed here rather than in the path filter so a bad id is a 400, not a 404.
    let receiver_id = target
        .parse::<UserId>()
        .map_err(|_| reject::custom(ApiErrorCode::BadRequest))?;

    like_service
        .send_like(&token, receiver_id)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&ApiResponse::ok(SendLikeResponse {
        receiver_id,
    })))
}

#[derive(Debug, Deserialize)]
pub struct LikesQuery {
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Serialize)]
pub struct LikesResponse {
    pub likes: Vec<LikeView>,
}

pub async fn get_likes(
    query: LikesQuery,
    token: String,
    like_service: Arc<dyn LikeService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let likes = like_service
        .get_likes(&token, query.limit, query.offset)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    Ok(warp::reply::json(&ApiResponse::ok(LikesResponse { likes })))
}
