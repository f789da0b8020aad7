use super::handler;
use crate::api::v1::handler::LikesQuery;
use crate::server::Server;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

pub fn routes(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let send_like = warp::post()
        .and(warp::path("likes"))
        .and(warp::path::param::<String>())
        .and(warp::path::end())
        .and(with_bearer_token())
        .and(with(server.like_service.clone()))
        .and_then(handler::send_like);

    let get_likes = warp::get()
        .and(warp::path("likes"))
        .and(warp::path::end())
        .and(warp::query::<LikesQuery>())
        .and(with_bearer_token())
        .and(with(server.like_service.clone()))
        .and_then(handler::get_likes);

    send_like.or(get_likes)
}

fn with<ServiceType>(
    service: Arc<ServiceType>,
) -> impl Filter<Extract = (Arc<ServiceType>,), Error = Infallible> + Clone
where
    ServiceType: Send + Sync + ?Sized,
{
    warp::any().map(move || service.clone())
}

/// Never rejects: a missing header yields an empty token and the session
/// layer decides between "missing" and "invalid".
fn with_bearer_token() -> impl Filter<Extract = (String,), Error = Infallible> + Clone {
    warp::header::optional::<String>("authorization")
        .map(|header: Option<String>| header.map(|h| bearer_token(&h)).unwrap_or_default())
        .recover(|_| async { Ok::<_, Infallible>(String::new()) })
        .unify()
}

fn bearer_token(header: &str) -> String {
    let header = header.trim();
    // "Bearer " with nothing after it trims down to the bare scheme.
    if header.eq_ignore_ascii_case("bearer") {
        return String::new();
    }
    header
        .strip_prefix("Bearer ")
        .unwrap_or(header)
        .trim()
        .to_string()
}
