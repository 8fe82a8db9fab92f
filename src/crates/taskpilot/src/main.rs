//! TaskPilot binary.
//!
//! `taskpilot serve` runs the REST API; `taskpilot console` (the default)
//! runs the interactive REPL. Both share the same engine, store, and
//! Ollama client, configured from the environment.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use taskpilot::api::{create_router, AppState};
use taskpilot::console;
use taskpilot::engine::CommandEngine;
use taskpilot_core::{Priority, Task, TaskStore};
use taskpilot_llm::OllamaClient;
use tokio::sync::Mutex;

#[derive(Parser)]
#[command(name = "taskpilot")]
#[command(about = "AI-powered task management system", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the REST API server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 8000)]
        port: u16,
    },

    /// Run the interactive console (default)
    Console,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing/logging
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(rust_log).init();

    let cli = Cli::parse();

    let store = Arc::new(Mutex::new(TaskStore::new()));
    seed_demo_tasks(&store).await;

    let ollama = OllamaClient::from_env();
    tracing::info!("Ollama model: {}", ollama.model());

    let engine = Arc::new(CommandEngine::new(store.clone(), Arc::new(ollama.clone())));

    match cli.command.unwrap_or(Commands::Console) {
        Commands::Serve { host, port } => {
            serve(host, port, AppState { store, engine, ollama }).await
        }
        Commands::Console => console::run(engine).await,
    }
}

async fn serve(host: String, port: u16, state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let app = create_router(state);

    tracing::info!("Starting TaskPilot server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("TaskPilot server shut down gracefully");
    Ok(())
}

/// Signal for graceful shutdown (ctrl-c or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL-C signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received CTRL-C signal, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down");
        }
    }
}

/// Seed a couple of example tasks so the list is not empty on first run.
async fn seed_demo_tasks(store: &Arc<Mutex<TaskStore>>) {
    let due = (chrono::Utc::now() + chrono::Duration::days(2))
        .format("%Y-%m-%d")
        .to_string();

    let mut store = store.lock().await;
    store.add(
        Task::new("Complete project proposal")
            .with_description("Write up the final project proposal for client review")
            .with_priority(Priority::High)
            .with_due_date(due)
            .with_tags(["work", "client"]),
    );
    store.add(
        Task::new("Buy groceries")
            .with_description("Milk, eggs, bread, vegetables")
            .with_tags(["personal", "shopping"]),
    );
}
