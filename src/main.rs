mod core;
mod features;
mod modules;
mod shared;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::core::config::{Config, TranscriptFormat};
use crate::core::database;
use crate::core::router::{build_router, AppServices};
use crate::features::logs::{HtmlTranscriptFormatter, PlainTextFormatter, TranscriptFormatter};
use crate::features::threads::PgThreadStore;
use crate::features::tickets::PgTicketStore;
use crate::modules::storage::LocalAttachmentStore;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "System info: tokio_worker_threads={}, pid={}",
        worker_threads,
        std::process::id()
    );

    let pool = database::create_pool(&config.database).await?;

    let formatter: Arc<dyn TranscriptFormatter> = match config.transcript.format {
        TranscriptFormat::Text => Arc::new(PlainTextFormatter),
        TranscriptFormat::Html => Arc::new(HtmlTranscriptFormatter::new()?),
    };

    let attachments = LocalAttachmentStore::new(&config.attachments.dir);
    if !attachments.dir().is_dir() {
        tracing::warn!(
            "Attachment directory {} does not exist; every attachment request will 404",
            attachments.dir().display()
        );
    }

    let services = AppServices {
        threads: Arc::new(PgThreadStore::new(pool.clone())),
        formatter,
        attachments: Arc::new(attachments),
        attachment_chunk_size: config.attachments.chunk_size,
        tickets: Arc::new(PgTicketStore::new(pool)),
    };

    let app = build_router(services, &config.app, &config.swagger);

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.set_nodelay(true)?;

    // Large attachments go out in many writes
    socket.set_send_buffer_size(256 * 1024)?;

    let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
    socket.set_tcp_keepalive(&keepalive)?;

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    if config.swagger.enabled {
        tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
