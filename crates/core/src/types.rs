/// Archived designs are identified by UUIDv7, so ids minted in the same
/// session sort by creation time.
pub type DesignId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
