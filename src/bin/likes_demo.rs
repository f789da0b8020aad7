/// Drives the like service end to end against the bundled fixture.
///
/// $ cargo run --bin likes_demo -- fixtures/seed.json
use heartline::domain_model::UserId;
use heartline::infra_memory::MemoryStores;
use heartline::logger::*;
use heartline::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let logger = Logger::new_bootstrap();
    logger.reload_from_config(&LogConfig {
        filter: "heartline=debug".to_string(),
    })?;

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "fixtures/seed.json".to_string());
    let server = Server::with_memory_stores(MemoryStores::from_seed_file(&path)?);
    let likes = server.like_service.clone();

    // taro (1) likes mei (6); a second attempt is refused.
    info!("first like: {:?}", likes.send_like("USERTOKEN1", UserId(6)).await);
    info!("second like: {:?}", likes.send_like("USERTOKEN1", UserId(6)).await);
    info!("same gender: {:?}", likes.send_like("USERTOKEN1", UserId(4)).await);
    info!("bad token: {:?}", likes.send_like("nope", UserId(6)).await);

    // hanako (2) is matched with taro, so only yuki (3) and aiko (5) show up.
    for view in likes.get_likes("USERTOKEN1", 10, 0).await? {
        info!(
            "{} ({}) liked at {} image={}",
            view.profile.nickname, view.sender_id, view.liked_at, view.image_uri
        );
    }

    server.shutdown().await;
    Ok(())
}
