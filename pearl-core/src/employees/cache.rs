//! Employee read cache

use crate::models::Employee;

/// Ordered, ID-keyed mirror of the employee table.
///
/// Staleness contract: the cache reflects the last [`refresh`] plus local
/// [`upsert`]/[`evict`] calls. It is never consulted by the store and is
/// only accurate against it if the owning controller listed employees
/// before making cache-based decisions. Another writer mutating the store
/// is not observed until the next refresh.
///
/// [`refresh`]: EmployeeCache::refresh
/// [`upsert`]: EmployeeCache::upsert
/// [`evict`]: EmployeeCache::evict
#[derive(Debug, Clone, Default)]
pub struct EmployeeCache {
    entries: Vec<Employee>,
}

impl EmployeeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole cache with a fresh snapshot, empty included.
    pub fn refresh(&mut self, entries: Vec<Employee>) {
        self.entries = entries;
    }

    /// Replace the entry with the same ID in place, or append.
    pub fn upsert(&mut self, employee: Employee) {
        match self.position(&employee.id) {
            Some(index) => self.entries[index] = employee,
            None => self.entries.push(employee),
        }
    }

    /// Drop the entry with this ID, returning it if present.
    pub fn evict(&mut self, id: &str) -> Option<Employee> {
        self.position(id).map(|index| self.entries.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Employee> {
        self.position(id).map(|index| &self.entries[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn all(&self) -> &[Employee] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_employee(id: &str, first_name: &str) -> Employee {
        Employee {
            id: id.to_string(),
            first_name: first_name.to_string(),
            ..Employee::default()
        }
    }

    #[test]
    fn test_refresh_replaces_everything() {
        let mut cache = EmployeeCache::new();
        cache.upsert(make_employee("1", "Ana"));
        cache.refresh(vec![make_employee("2", "Ben")]);
        assert!(!cache.contains("1"));
        assert!(cache.contains("2"));

        cache.refresh(Vec::new());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_upsert_replaces_in_place_keeping_order() {
        let mut cache = EmployeeCache::new();
        cache.refresh(vec![make_employee("1", "Ana"), make_employee("2", "Ben")]);

        cache.upsert(make_employee("1", "Anna"));
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.position("1"), Some(0));
        assert_eq!(cache.get("1").unwrap().first_name, "Anna");
    }

    #[test]
    fn test_upsert_appends_unknown_id() {
        let mut cache = EmployeeCache::new();
        cache.upsert(make_employee("1", "Ana"));
        cache.upsert(make_employee("2", "Ben"));
        assert_eq!(cache.position("2"), Some(1));
    }

    #[test]
    fn test_evict_returns_the_entry() {
        let mut cache = EmployeeCache::new();
        cache.upsert(make_employee("1", "Ana"));
        let evicted = cache.evict("1");
        assert_eq!(evicted.unwrap().first_name, "Ana");
        assert!(cache.evict("1").is_none());
    }
}
