use models::draft::BookingDraft;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use uuid::Uuid;

struct Entry {
    draft: BookingDraft,
    touched: Instant,
}

/// Keyed store for in-progress wizard drafts. Each caller holds the opaque
/// key of exactly one draft, so concurrent bookers never see each other's
/// state. Entries expire after the TTL and are purged lazily on access.
pub struct DraftStore {
    ttl: Duration,
    entries: Mutex<HashMap<Uuid, Entry>>,
}

impl DraftStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Step 1: store a fresh draft and hand back its key
    pub fn insert(&self, draft: BookingDraft) -> Uuid {
        let id = Uuid::new_v4();
        let mut entries = self.entries.lock().unwrap();

        Self::purge_expired(&mut entries, self.ttl);
        entries.insert(
            id,
            Entry {
                draft,
                touched: Instant::now(),
            },
        );

        id
    }

    /// Fetch a draft, refreshing its expiry. Returns None for unknown or
    /// expired keys; callers treat that as a reset to step 1.
    pub fn get(&self, id: Uuid) -> Option<BookingDraft> {
        let mut entries = self.entries.lock().unwrap();

        Self::purge_expired(&mut entries, self.ttl);
        entries.get_mut(&id).map(|entry| {
            entry.touched = Instant::now();
            entry.draft.clone()
        })
    }

    /// Replace the draft stored under an existing key. Returns false when
    /// the key is unknown or expired.
    pub fn update(&self, id: Uuid, draft: BookingDraft) -> bool {
        let mut entries = self.entries.lock().unwrap();

        Self::purge_expired(&mut entries, self.ttl);
        match entries.get_mut(&id) {
            Some(entry) => {
                entry.draft = draft;
                entry.touched = Instant::now();
                true
            }
            None => false,
        }
    }

    /// Drop a draft after a successful commit
    pub fn remove(&self, id: Uuid) -> Option<BookingDraft> {
        self.entries
            .lock()
            .unwrap()
            .remove(&id)
            .map(|entry| entry.draft)
    }

    fn purge_expired(entries: &mut HashMap<Uuid, Entry>, ttl: Duration) {
        entries.retain(|_, entry| entry.touched.elapsed() < ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use models::draft::StayFields;

    fn draft() -> BookingDraft {
        BookingDraft::begin(StayFields {
            room_slug: "sea-view-double".to_string(),
            arrival_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            departure_date: NaiveDate::from_ymd_opt(2025, 6, 3).unwrap(),
            number_of_adults: 2,
            number_of_children: 0,
            special_requests: None,
        })
    }

    #[test]
    fn test_insert_and_get_round_trip() {
        let store = DraftStore::new(Duration::from_secs(60));
        let id = store.insert(draft());

        assert_eq!(store.get(id), Some(draft()));
    }

    #[test]
    fn test_unknown_keys_are_absent() {
        let store = DraftStore::new(Duration::from_secs(60));
        assert_eq!(store.get(Uuid::new_v4()), None);
        assert!(!store.update(Uuid::new_v4(), draft()));
    }

    #[test]
    fn test_drafts_are_isolated_per_key() {
        let store = DraftStore::new(Duration::from_secs(60));
        let first = store.insert(draft());

        let mut other = draft();
        other.stay.room_slug = "garden-suite".to_string();
        let second = store.insert(other.clone());

        assert_eq!(store.get(first), Some(draft()));
        assert_eq!(store.get(second), Some(other));
    }

    #[test]
    fn test_expired_drafts_reset_to_absent() {
        let store = DraftStore::new(Duration::ZERO);
        let id = store.insert(draft());

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(store.get(id), None);
    }

    #[test]
    fn test_remove_clears_the_draft() {
        let store = DraftStore::new(Duration::from_secs(60));
        let id = store.insert(draft());

        assert_eq!(store.remove(id), Some(draft()));
        assert_eq!(store.get(id), None);
    }
}
