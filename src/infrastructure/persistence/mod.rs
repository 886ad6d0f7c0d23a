mod firestore_interaction_log;
mod interaction_log_factory;
mod noop_interaction_log;
mod pg_interaction_log;
mod pg_pool;

pub use firestore_interaction_log::{DEFAULT_FIRESTORE_BASE_URL, FirestoreInteractionLog};
pub use interaction_log_factory::InteractionLogFactory;
pub use noop_interaction_log::NoopInteractionLog;
pub use pg_interaction_log::PgInteractionLog;
pub use pg_pool::connect_interaction_db;
