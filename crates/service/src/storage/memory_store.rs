use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::StoreError;
use crate::pagination::Pagination;

/// A value the store can hold. The store only ever interprets the identity.
pub trait Record: Clone + Send + Sync {
    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

/// One window of records and the collection size it was cut from.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: usize,
}

struct Inner<T> {
    records: Vec<T>,
    next_id: u64,
}

/// Ordered in-memory record collection behind a single readers-writer lock.
///
/// Records keep creation order; deletion compacts without reordering and
/// update replaces in place. Identities start at 1 and are never reused.
/// Reads (`get`, `list`, `page`, `len`) share the lock, writes take it exclusively,
/// and nothing inside a critical section awaits anything but the lock itself.
pub struct MemoryStore<T> {
    inner: Arc<RwLock<Inner<T>>>,
}

impl<T> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(Inner { records: Vec::new(), next_id: 1 })) }
    }

    /// Assign the next identity and append.
    pub async fn create(&self, mut record: T) -> T {
        let mut inner = self.inner.write().await;
        record.set_id(inner.next_id);
        inner.next_id += 1;
        inner.records.push(record.clone());
        record
    }

    pub async fn get(&self, id: u64) -> Result<T, StoreError> {
        let inner = self.inner.read().await;
        inner
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Replace the record with `id` in place.
    ///
    /// A missing `id` is `NotFound` whatever the replacement carries. A
    /// replacement with id `0` is stamped with `id`; any other id that differs
    /// from `id` is rejected and leaves the store untouched.
    pub async fn update(&self, id: u64, mut replacement: T) -> Result<T, StoreError> {
        let mut inner = self.inner.write().await;
        let slot = inner
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(StoreError::NotFound(id))?;

        match replacement.id() {
            0 => replacement.set_id(id),
            given if given != id => {
                return Err(StoreError::invalid(format!(
                    "replacement id {given} does not match target id {id}"
                )))
            }
            _ => {}
        }
        *slot = replacement.clone();
        Ok(replacement)
    }

    pub async fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let pos = inner
            .records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        inner.records.remove(pos);
        Ok(())
    }

    /// Positional window `[(page-1)*page_size, page*page_size)` over the
    /// current order. A window past the end yields an empty vec.
    pub async fn list(&self, page: usize, page_size: usize) -> Result<Vec<T>, StoreError> {
        Ok(self.page(page, page_size).await?.items)
    }

    /// Same window as `list`, plus the total record count read under the same
    /// lock, so the two always agree.
    pub async fn page(&self, page: usize, page_size: usize) -> Result<Page<T>, StoreError> {
        if page == 0 {
            return Err(StoreError::invalid("page must be >= 1"));
        }
        if page_size == 0 {
            return Err(StoreError::invalid("page size must be >= 1"));
        }
        let window = Pagination { page, page_size };

        let inner = self.inner.read().await;
        let total = inner.records.len();
        let items = match window.offset() {
            Some(start) if start < total => {
                let end = start.saturating_add(page_size).min(total);
                inner.records[start..end].to_vec()
            }
            _ => Vec::new(),
        };
        Ok(Page { items, total })
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: u64,
        body: String,
    }

    impl Record for Note {
        fn id(&self) -> u64 { self.id }
        fn set_id(&mut self, id: u64) { self.id = id; }
    }

    fn note(body: &str) -> Note {
        Note { id: 0, body: body.into() }
    }

    async fn seeded(n: usize) -> MemoryStore<Note> {
        let store = MemoryStore::new();
        for i in 0..n {
            store.create(note(&format!("n{i}"))).await;
        }
        store
    }

    fn ids(records: &[Note]) -> Vec<u64> {
        records.iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = MemoryStore::new();
        let a = store.create(note("a")).await;
        let b = store.create(note("b")).await;
        let c = store.create(Note { id: 99, body: "c".into() }).await;
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
        assert_eq!(store.get(1).await, Ok(a));
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = seeded(2).await;
        store.delete(2).await.unwrap();
        let next = store.create(note("again")).await;
        assert_eq!(next.id, 3);
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let store = seeded(1).await;
        assert_eq!(store.get(7).await, Err(StoreError::NotFound(7)));
        assert_eq!(store.update(7, note("x")).await, Err(StoreError::NotFound(7)));
        assert_eq!(store.delete(7).await, Err(StoreError::NotFound(7)));

        store.delete(1).await.unwrap();
        assert_eq!(store.get(1).await, Err(StoreError::NotFound(1)));
        assert_eq!(store.delete(1).await, Err(StoreError::NotFound(1)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn update_of_missing_id_is_not_found_even_with_other_id() {
        let store = seeded(2).await;
        let err = store.update(7, Note { id: 8, body: "x".into() }).await;
        assert_eq!(err, Err(StoreError::NotFound(7)));
    }

    #[tokio::test]
    async fn update_after_delete_is_not_found() {
        let store = seeded(2).await;
        store.delete(1).await.unwrap();
        assert_eq!(store.update(1, note("back")).await, Err(StoreError::NotFound(1)));
        let again = Note { id: 1, body: "back".into() };
        assert_eq!(store.update(1, again).await, Err(StoreError::NotFound(1)));
        assert_eq!(ids(&store.list(1, 10).await.unwrap()), vec![2]);
    }

    #[tokio::test]
    async fn page_reports_total_alongside_window() {
        let store = seeded(5).await;
        let page = store.page(2, 2).await.unwrap();
        assert_eq!(ids(&page.items), vec![3, 4]);
        assert_eq!(page.total, 5);

        let past_end = store.page(9, 2).await.unwrap();
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total, 5);
    }

    #[tokio::test]
    async fn delete_preserves_relative_order() {
        let store = seeded(5).await;
        store.delete(3).await.unwrap();
        let all = store.list(1, 10).await.unwrap();
        assert_eq!(ids(&all), vec![1, 2, 4, 5]);
    }

    #[tokio::test]
    async fn update_replaces_in_place() {
        let store = seeded(3).await;
        let replacement = Note { id: 2, body: "two".into() };
        assert_eq!(store.update(2, replacement.clone()).await, Ok(replacement.clone()));
        assert_eq!(store.get(2).await, Ok(replacement));
        assert_eq!(ids(&store.list(1, 10).await.unwrap()), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_stamps_unset_id() {
        let store = seeded(1).await;
        let updated = store.update(1, note("fresh")).await.unwrap();
        assert_eq!(updated, Note { id: 1, body: "fresh".into() });
    }

    #[tokio::test]
    async fn update_rejects_mismatched_id() {
        let store = seeded(2).await;
        let err = store.update(1, Note { id: 2, body: "x".into() }).await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidArgument(_)));
        assert_eq!(store.get(1).await.unwrap().body, "n0");
        assert_eq!(store.get(2).await.unwrap().body, "n1");
    }

    #[tokio::test]
    async fn pages_concatenate_to_full_sequence() {
        let store = seeded(23).await;
        store.delete(5).await.unwrap();
        let expected = ids(&store.list(1, 100).await.unwrap());

        for size in 1..=8 {
            let mut seen = Vec::new();
            let mut page = 1;
            loop {
                let chunk = store.list(page, size).await.unwrap();
                assert!(chunk.len() <= size);
                if chunk.is_empty() {
                    break;
                }
                seen.extend(ids(&chunk));
                page += 1;
            }
            assert_eq!(seen, expected, "page size {size}");
        }
    }

    #[tokio::test]
    async fn page_past_end_is_empty() {
        let store = seeded(3).await;
        assert!(store.list(2, 3).await.unwrap().is_empty());
        assert!(store.list(100, 10).await.unwrap().is_empty());
        assert!(store.list(usize::MAX, usize::MAX).await.unwrap().is_empty());
        assert!(MemoryStore::<Note>::new().list(1, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn last_page_is_clamped() {
        let store = seeded(5).await;
        assert_eq!(ids(&store.list(2, 3).await.unwrap()), vec![4, 5]);
    }

    #[tokio::test]
    async fn zero_page_or_size_is_invalid() {
        let store = seeded(1).await;
        assert!(matches!(store.list(0, 10).await, Err(StoreError::InvalidArgument(_))));
        assert!(matches!(store.list(1, 0).await, Err(StoreError::InvalidArgument(_))));
    }

    #[tokio::test]
    async fn scenario_create_page_delete() {
        let store = MemoryStore::new();
        assert_eq!(store.create(note("A")).await.id, 1);
        assert_eq!(store.create(note("B")).await.id, 2);
        assert_eq!(store.list(1, 1).await.unwrap(), vec![Note { id: 1, body: "A".into() }]);
        assert_eq!(store.list(2, 1).await.unwrap(), vec![Note { id: 2, body: "B".into() }]);
        store.delete(1).await.unwrap();
        assert_eq!(store.get(1).await, Err(StoreError::NotFound(1)));
        assert_eq!(store.list(1, 10).await.unwrap(), vec![Note { id: 2, body: "B".into() }]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_creates_get_distinct_contiguous_ids() {
        const N: u64 = 200;
        let store = MemoryStore::<Note>::new();

        let handles: Vec<_> = (0..N)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move { store.create(note(&i.to_string())).await.id })
            })
            .collect();

        let mut assigned = BTreeSet::new();
        for h in handles {
            assert!(assigned.insert(h.await.unwrap()), "duplicate id");
        }
        assert_eq!(assigned, (1..=N).collect::<BTreeSet<_>>());
        assert_eq!(store.len().await as u64, N);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn readers_never_observe_partial_writes() {
        let store = seeded(10).await;

        let writer = {
            let store = store.clone();
            tokio::spawn(async move {
                for i in 1..=10u64 {
                    store.update(i, Note { id: i, body: "updated".into() }).await.unwrap();
                    store.create(note("extra")).await;
                }
            })
        };
        let reader = {
            let store = store.clone();
            tokio::spawn(async move {
                for _ in 0..50 {
                    let all = store.list(1, 1000).await.unwrap();
                    let ids = ids(&all);
                    let mut sorted = ids.clone();
                    sorted.sort_unstable();
                    sorted.dedup();
                    assert_eq!(ids, sorted, "ids must stay unique and ordered");
                }
            })
        };

        writer.await.unwrap();
        reader.await.unwrap();
        assert_eq!(store.len().await, 20);
    }
}
