use sea_orm::Database;
use tracing::info;

use pjm_core::tracing::init_tracing;
use pjm_tracker::config::TrackerConfig;
use pjm_tracker::router::build_router;
use pjm_tracker::state::AppState;
use pjm_tracker::usecase::seed::SeedReferenceDataUseCase;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = TrackerConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState { db };

    // Idempotent reference-data seeding: roles, priorities, bootstrap admin.
    let seed = SeedReferenceDataUseCase {
        roles: state.role_repo(),
        priorites: state.priorite_repo(),
        utilisateurs: state.utilisateur_repo(),
    };
    seed.execute().await.expect("failed to seed reference data");

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.tracker_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!("tracker service listening on {http_addr}");
    axum::serve(listener, router).await.expect("server error");
}
