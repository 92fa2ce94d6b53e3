//! Lock aliases so the lock implementation can be swapped in one place.

/// A synchronous mutex. Never hold it across an await point.
pub type SyncMutex<T> = parking_lot::Mutex<T>;

/// A synchronous reader-writer lock. Never hold it across an await point.
pub type SyncRwLock<T> = parking_lot::RwLock<T>;
