use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// the current time as milliseconds since the unix epoch, which is how every timestamp in the vault is stored
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// generates a new random record id
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// acquires a read lock, recovering the inner value if the lock was poisoned
pub fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| {
        log::warn!("A lock was poisoned! Recovering...");
        PoisonError::into_inner(e)
    })
}

pub fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| {
        log::warn!("A lock was poisoned! Recovering...");
        lock.clear_poison();
        PoisonError::into_inner(e)
    })
}
