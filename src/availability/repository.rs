use chrono::{DateTime, Local};
use fnv::FnvHashMap;

#[cfg(test)]
use mockall::automock;

use super::user::{User, UserId};

/// Keyed storage of users. Lookups of unknown ids yield nothing rather than
/// an error, and list queries come back in no particular order.
#[cfg_attr(test, automock)]
pub trait Repository {
    fn find(&self, id: &UserId) -> Option<User>;
    fn find_all(&self) -> Vec<User>;

    /// Users whose latest status covers `date`.
    fn find_all_out(&self, date: DateTime<Local>) -> Vec<User>;

    /// Users among `ids`; unknown ids are skipped.
    fn find_all_by_id(&self, ids: &[UserId]) -> Vec<User>;

    /// Replaces any stored user with the same id.
    fn add(&mut self, user: User);
    fn remove(&mut self, id: &UserId);
}

/// Process-lifetime store. Callers serialize access; wrap it in a mutex
/// before sharing it between concurrent sessions.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    users: FnvHashMap<UserId, User>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Repository for InMemoryRepository {
    fn find(&self, id: &UserId) -> Option<User> {
        self.users.get(id).cloned()
    }

    fn find_all(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    fn find_all_out(&self, date: DateTime<Local>) -> Vec<User> {
        self.users
            .values()
            .filter(|user| !user.is_available(date))
            .cloned()
            .collect()
    }

    fn find_all_by_id(&self, ids: &[UserId]) -> Vec<User> {
        ids.iter()
            .filter_map(|id| self.users.get(id))
            .cloned()
            .collect()
    }

    fn add(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    fn remove(&mut self, id: &UserId) {
        self.users.remove(id);
    }
}
