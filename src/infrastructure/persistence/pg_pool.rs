use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::application::ports::InteractionLogError;

const CONNECT_ATTEMPTS: u32 = 6;
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);
const MAX_BACKOFF: Duration = Duration::from_secs(8);

/// Opens the interaction database and applies pending migrations. Connection
/// attempts back off exponentially while the server is still starting.
#[tracing::instrument(skip(url))]
pub async fn connect_interaction_db(
    url: &str,
    max_connections: u32,
) -> Result<PgPool, InteractionLogError> {
    let options = PgPoolOptions::new().max_connections(max_connections);
    let mut backoff = INITIAL_BACKOFF;
    let mut attempt = 1;

    let pool = loop {
        match options.clone().connect(url).await {
            Ok(pool) => break pool,
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                tracing::warn!(
                    error = %e,
                    attempt,
                    backoff_ms = backoff.as_millis(),
                    "Interaction database unreachable, retrying"
                );
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(MAX_BACKOFF);
                attempt += 1;
            }
            Err(e) => return Err(InteractionLogError::ConnectionFailed(e.to_string())),
        }
    };

    sqlx::migrate!()
        .run(&pool)
        .await
        .map_err(|e| InteractionLogError::ConnectionFailed(format!("migrations: {}", e)))?;

    tracing::info!(attempt, "Interaction database ready");

    Ok(pool)
}
