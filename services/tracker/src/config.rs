/// Tracker service configuration loaded from environment variables.
#[derive(Debug)]
pub struct TrackerConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8080). Env var: `TRACKER_PORT`.
    pub tracker_port: u16,
}

impl TrackerConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            tracker_port: std::env::var("TRACKER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        }
    }
}
