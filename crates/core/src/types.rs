/// Internal primary keys (companies, admin users, sessions) are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// DSAR requests use random 128-bit identifiers so the public confirmation
/// lookup cannot be enumerated.
pub type RequestId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
