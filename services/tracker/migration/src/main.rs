use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(pjm_tracker_migration::Migrator).await;
}
