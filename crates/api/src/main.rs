#![forbid(unsafe_code)]

use depot_api::{AppState, config, router};
use depot_storage::{NewBranch, NewCategory, NewItem, SqliteStore, StoreError};
use tracing_subscriber::EnvFilter;

const SERVER_NAME: &str = "depot_api";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

fn usage() -> &'static str {
    "depot_api — multi-branch inventory HTTP API\n\n\
USAGE:\n\
  depot_api [--db PATH] [--bind ADDR] [--seed-demo]\n\
\n\
FLAGS:\n\
  -h, --help       Print this help and exit\n\
  -V, --version    Print version and exit\n\
\n\
NOTES:\n\
  - The database path also comes from DATABASE_URL (sqlite:// prefix allowed)\n\
  - The bind address also comes from DEPOT_BIND (default 127.0.0.1:8000)\n\
  - --seed-demo inserts a small demo catalog into an empty database\n"
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = std::env::args().collect::<Vec<_>>();
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-h" | "--help"))
    {
        print!("{}", usage());
        return Ok(());
    }
    if args
        .iter()
        .any(|arg| matches!(arg.as_str(), "-V" | "--version"))
    {
        println!("{SERVER_NAME} {SERVER_VERSION}");
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let db_path = config::parse_db_path(&args);
    let bind = config::parse_bind_addr(&args);

    let mut store = SqliteStore::open(&db_path)?;
    if config::parse_seed_demo(&args) {
        seed_demo_data(&mut store)?;
    }

    let state = AppState::new(store);
    let app = router(state.clone());

    let listener = tokio::net::TcpListener::bind(bind.as_str()).await?;
    tracing::info!(bind = %bind, db = %db_path.display(), "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Every handler clone is gone once serve returns; close the store so
    // shutdown surfaces any close-time error instead of dropping it.
    if let Some(store) = state.into_store() {
        store.close()?;
    }
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for shutdown signal");
    }
}

/// Catalog, branch, and stock rows are created out-of-band; this seeds a small
/// demo set so a fresh database has something to serve.
fn seed_demo_data(store: &mut SqliteStore) -> Result<(), StoreError> {
    if !store.list_categories()?.is_empty() {
        tracing::info!("database already has a catalog, skipping demo seed");
        return Ok(());
    }

    let produce = store.insert_category(NewCategory {
        category_name: "Produce".to_string(),
        image: None,
    })?;
    let dry_goods = store.insert_category(NewCategory {
        category_name: "Dry Goods".to_string(),
        image: None,
    })?;

    let tomatoes = store.insert_item(NewItem {
        item_name: "Tomatoes".to_string(),
        unit: "kg".to_string(),
        amount: 0,
        image: None,
        category_id: produce,
    })?;
    let rice = store.insert_item(NewItem {
        item_name: "Rice".to_string(),
        unit: "kg".to_string(),
        amount: 0,
        image: None,
        category_id: dry_goods,
    })?;

    let downtown = store.insert_branch(NewBranch {
        branch_name: "Downtown".to_string(),
        location: Some("12 Main St".to_string()),
    })?;

    store.put_main_stock(tomatoes, 100)?;
    store.put_main_stock(rice, 250)?;
    store.put_branch_stock(downtown, tomatoes, 20)?;

    tracing::info!("seeded demo catalog");
    Ok(())
}
