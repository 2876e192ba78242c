/// Jukebox Server - playback state over HTTP
use anyhow::Context;
use clap::{Parser, Subcommand};
use jukebox_playback::{PlaybackManager, PlaybackState};
use jukebox_server::{api, config::ServerConfig, state::AppState, SourceDispatcher};
use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jukebox-server")]
#[command(about = "Jukebox playback state server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long, env = "JUKEBOX_CONFIG")]
        config: Option<PathBuf>,
    },
    /// List every configured source and its songs
    Catalog {
        /// Configuration file path
        #[arg(short, long, env = "JUKEBOX_CONFIG")]
        config: Option<PathBuf>,
    },
    /// Run a scripted session against the default sources
    Demo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "jukebox_server=info,jukebox_playback=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::Catalog { config } => {
            catalog(config)?;
        }
        Commands::Demo => {
            demo()?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let config = ServerConfig::load(path.as_deref()).context("Failed to load configuration")?;
    config.validate()?;
    Ok(config)
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    info!("Starting Jukebox Server");
    info!("Host: {}", config.server.host);
    info!("Port: {}", config.server.port);

    let app_state = AppState::from_config(&config);
    let app = api::create_router(app_state);

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .context("Invalid server host")?,
        config.server.port,
    ));

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

fn catalog(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let registry = config.registry();

    println!("Sources:");
    for source in registry.iter() {
        println!("  {} ({} songs)", source.name(), source.catalog().len());
        for song in source.catalog() {
            println!("    {}", song);
        }
    }

    Ok(())
}

/// Drive the manager through a short session with logging observers
fn demo() -> anyhow::Result<()> {
    let registry = Arc::new(ServerConfig::default().registry());

    let mut player = PlaybackManager::new();
    player.seed(registry.collect());
    info!("Playlist loaded: {:?}", player.playlist());

    let dispatcher = SourceDispatcher::new(Arc::clone(&registry));
    player.subscribe_state_change(dispatcher.clone());
    player.subscribe_progress(dispatcher);

    player.subscribe_state_change(|state: PlaybackState| {
        info!("Player state changed: {}", state);
    });
    player.subscribe_progress(|song: Option<&str>, elapsed: Duration| {
        info!(
            "Progress update - Song: {}, Time: {}",
            song.unwrap_or("None"),
            elapsed.as_secs()
        );
    });

    player.play()?;
    player.skip()?;
    player.pause()?;
    player.previous()?;
    player.stop();
    player.add_song("new_song.mp3")?;
    player.reorder(["new_song.mp3", "spotify_song1", "local_song1.mp3"])?;

    info!("Final playlist: {:?}", player.playlist());
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
