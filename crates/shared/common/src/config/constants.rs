//! Environment variable names and their defaults.
//!
//! The names are the external contract and are matched case-sensitively.

// =============================================================================
// Orders service
// =============================================================================

/// Port the application listens on
pub const ENV_APP_PORT: &str = "APP_PORT";

/// Database connection URI
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Redis connection URI
pub const ENV_REDIS_URL: &str = "REDIS_URL";

/// Log level directive
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";

/// Default application port
pub const DEFAULT_APP_PORT: u16 = 5000;

/// Default database URL (empty means "not configured")
pub const DEFAULT_DATABASE_URL: &str = "";

/// Default Redis URL (empty means "not configured")
pub const DEFAULT_REDIS_URL: &str = "";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Inventory service
// =============================================================================

/// MongoDB connection URI
pub const ENV_MONGO_URL: &str = "MONGO_URL";

/// Redis URL of the shared order event queue
pub const ENV_EVENT_STORE_URL: &str = "EVENT_STORE_URL";

/// Inventory server port. Fixed, never read from the environment.
pub const INVENTORY_SERVER_PORT: u16 = 3000;

/// Default MongoDB URL
pub const DEFAULT_MONGO_URL: &str = "";

/// Default event store URL
pub const DEFAULT_EVENT_STORE_URL: &str = "";
