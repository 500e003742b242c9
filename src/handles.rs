//! Opaque handle registry.
//!
//! The C surface hands out `void *` handles instead of raw object pointers
//! so stale or garbage values can be rejected instead of dereferenced. Ids
//! start at 1; 0 maps to the null handle and is never issued.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use crate::admin::AdminService;

static CLIENTS: Lazy<Mutex<HashMap<u64, Arc<AdminService>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

pub(crate) fn register(service: AdminService) -> u64 {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    CLIENTS
        .lock()
        .expect("client registry poisoned")
        .insert(id, Arc::new(service));
    id
}

pub(crate) fn get(id: u64) -> Option<Arc<AdminService>> {
    if id == 0 {
        return None;
    }
    CLIENTS
        .lock()
        .expect("client registry poisoned")
        .get(&id)
        .cloned()
}

pub(crate) fn remove(id: u64) -> Option<Arc<AdminService>> {
    if id == 0 {
        return None;
    }
    CLIENTS
        .lock()
        .expect("client registry poisoned")
        .remove(&id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AdminConfig;

    fn make_service() -> AdminService {
        AdminService::new(&AdminConfig::from_brokers("127.0.0.1:1")).unwrap()
    }

    #[test]
    fn zero_and_unknown_ids_resolve_to_nothing() {
        assert!(get(0).is_none());
        assert!(get(u64::MAX).is_none());
        assert!(remove(0).is_none());
        assert!(remove(u64::MAX).is_none());
    }

    #[test]
    fn register_get_remove_round_trip() {
        let id = register(make_service());
        assert!(id != 0);
        assert!(get(id).is_some());
        assert!(remove(id).is_some());
        assert!(get(id).is_none());
        assert!(remove(id).is_none());
    }

    #[test]
    fn ids_are_never_reused() {
        let a = register(make_service());
        assert!(remove(a).is_some());
        let b = register(make_service());
        assert!(b > a);
        assert!(remove(b).is_some());
    }
}
