use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tubelink::common::logger;
use tubelink::common::types::AnyResult;
use tubelink::configs::Config;
use tubelink::server::AppState;
use tubelink::transport;

#[tokio::main]
async fn main() -> AnyResult<()> {
    let config = Config::load()?;
    logger::init(&config);

    let shared_state = Arc::new(AppState::new(config.clone())?);

    let app = transport::http_server::router(shared_state)
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let address = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("Tubelink listening on {}", address);

    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
