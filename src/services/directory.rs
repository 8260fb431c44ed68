use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::core::interests::intersects;
use crate::models::{ConnectionStatus, NewUser, User};

/// Result of an atomic create-if-absent operation.
#[derive(Debug, Clone)]
pub enum CreateOutcome {
    /// No conflicting record existed; this is the newly created user.
    Created(User),
    /// A record already claimed the identity; this is the surviving user.
    Exists(User),
}

/// The authoritative in-memory store of users, interests and connections.
///
/// All three entity kinds are owned and exclusively mutated here. Absence is
/// reported as `None` or an empty vector; no operation raises a domain error.
///
/// Every operation takes the single internal lock, so the store stays
/// consistent under actix's multi-worker runtime. Lookup-then-insert flows
/// (`register_user`, `find_or_create_provider_user`) run under one write
/// acquisition, which closes the check-then-create race that two separate
/// calls would open.
///
/// Users are keyed in a `BTreeMap`, so every scan - and therefore the match
/// list - yields ascending-id order.
pub struct UserDirectory {
    inner: RwLock<DirectoryInner>,
}

#[derive(Debug)]
struct DirectoryInner {
    users: BTreeMap<u64, User>,
    interests: HashMap<u64, HashSet<String>>,
    connections: HashMap<u64, BTreeMap<u64, ConnectionStatus>>,
    next_id: u64,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(DirectoryInner {
                users: BTreeMap::new(),
                interests: HashMap::new(),
                connections: HashMap::new(),
                next_id: 1,
            }),
        }
    }

    // No operation panics while holding the lock, so a poisoned lock still
    // guards consistent state and can be recovered.
    fn read(&self) -> RwLockReadGuard<'_, DirectoryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DirectoryInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Look up a user by primary key.
    pub fn get_user(&self, id: u64) -> Option<User> {
        self.read().users.get(&id).cloned()
    }

    /// Look up a user by email. Linear scan; emails are unique by invariant.
    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        self.read()
            .users
            .values()
            .find(|user| user.email == email)
            .cloned()
    }

    /// Look up a user by identity-provider id. Linear scan.
    pub fn get_user_by_provider_id(&self, provider_id: &str) -> Option<User> {
        self.read()
            .users
            .values()
            .find(|user| user.provider_id.as_deref() == Some(provider_id))
            .cloned()
    }

    /// Create a user unconditionally.
    ///
    /// Assigns the next sequential id, starts with an empty interest list and
    /// stamps `created_at`. Performs no uniqueness check - use
    /// [`UserDirectory::register_user`] or
    /// [`UserDirectory::find_or_create_provider_user`] when the caller needs
    /// conflict detection.
    pub fn create_user(&self, new_user: NewUser) -> User {
        self.write().insert_user(new_user)
    }

    /// Atomically create a user unless the email is already registered.
    ///
    /// Lookup and insert happen under one lock acquisition; concurrent
    /// registrations for the same email cannot both succeed.
    pub fn register_user(&self, new_user: NewUser) -> CreateOutcome {
        let mut inner = self.write();

        if let Some(existing) = inner
            .users
            .values()
            .find(|user| user.email == new_user.email)
            .cloned()
        {
            return CreateOutcome::Exists(existing);
        }

        CreateOutcome::Created(inner.insert_user(new_user))
    }

    /// Atomically resolve a provider sign-in to a user record.
    ///
    /// Resolution order: provider id, then email, then create. Calling this
    /// repeatedly with the same identity always yields the same record.
    pub fn find_or_create_provider_user(&self, new_user: NewUser) -> User {
        let mut inner = self.write();

        let existing = new_user
            .provider_id
            .as_deref()
            .and_then(|pid| {
                inner
                    .users
                    .values()
                    .find(|user| user.provider_id.as_deref() == Some(pid))
            })
            .or_else(|| inner.users.values().find(|user| user.email == new_user.email))
            .cloned();

        match existing {
            Some(user) => user,
            None => inner.insert_user(new_user),
        }
    }

    /// Add an interest to a user's set.
    ///
    /// Set semantics: adding an interest the user already has is a no-op, and
    /// the denormalized `interests` sequence on the record never gains a
    /// duplicate. Unknown user ids are ignored.
    pub fn add_user_interest(&self, user_id: u64, interest: &str) {
        let mut inner = self.write();

        if !inner.users.contains_key(&user_id) {
            tracing::debug!("Ignoring interest for unknown user {}", user_id);
            return;
        }

        inner
            .interests
            .entry(user_id)
            .or_default()
            .insert(interest.to_string());

        if let Some(user) = inner.users.get_mut(&user_id) {
            if !user.interests.iter().any(|i| i == interest) {
                user.interests.push(interest.to_string());
            }
        }

        tracing::debug!("Added interest {:?} for user {}", interest, user_id);
    }

    /// Current interest set for a user, in no particular order.
    ///
    /// Empty when the user has no interests or does not exist.
    pub fn get_user_interests(&self, user_id: u64) -> Vec<String> {
        self.read()
            .interests
            .get(&user_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Every user whose interest set intersects the given list.
    ///
    /// Each user appears at most once regardless of how many interests
    /// overlap. Results are in ascending-id order; an empty input list
    /// matches nobody.
    pub fn get_users_by_interests(&self, interests: &[String]) -> Vec<User> {
        let inner = self.read();

        inner
            .users
            .values()
            .filter(|user| {
                inner
                    .interests
                    .get(&user.id)
                    .is_some_and(|set| intersects(set, interests))
            })
            .cloned()
            .collect()
    }

    /// Record or overwrite a pending connection from one user to another.
    ///
    /// Neither id is validated here; handlers check existence first.
    pub fn create_user_connection(&self, user_id: u64, connected_user_id: u64) {
        self.write()
            .connections
            .entry(user_id)
            .or_default()
            .insert(connected_user_id, ConnectionStatus::Pending);

        tracing::debug!("Recorded connection: {} -> {}", user_id, connected_user_id);
    }

    /// Resolve the target side of every outbound connection from a user.
    ///
    /// Targets that no longer resolve to a user are skipped. Ascending
    /// target-id order.
    pub fn get_user_connections(&self, user_id: u64) -> Vec<User> {
        let inner = self.read();

        inner
            .connections
            .get(&user_id)
            .map(|targets| {
                targets
                    .keys()
                    .filter_map(|id| inner.users.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        self.read().users.len()
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryInner {
    fn insert_user(&mut self, new_user: NewUser) -> User {
        let id = self.next_id;
        self.next_id += 1;

        let user = User {
            id,
            email: new_user.email,
            password: new_user.password,
            display_name: new_user.display_name,
            photo_url: new_user.photo_url,
            provider: new_user.provider,
            provider_id: new_user.provider_id,
            interests: Vec::new(),
            created_at: chrono::Utc::now(),
        };

        self.users.insert(id, user.clone());
        tracing::debug!("Created user {} ({})", id, user.email);

        user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password: Some("secret1".to_string()),
            display_name: Some("Test".to_string()),
            provider: Some("email".to_string()),
            ..NewUser::default()
        }
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let directory = UserDirectory::new();

        let first = directory.create_user(new_user("a@x.com"));
        let second = directory.create_user(new_user("b@x.com"));

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(first.interests.is_empty());
    }

    #[test]
    fn test_lookup_by_email_and_provider_id() {
        let directory = UserDirectory::new();
        directory.create_user(new_user("a@x.com"));
        directory.create_user(NewUser {
            email: "b@x.com".to_string(),
            provider: Some("google".to_string()),
            provider_id: Some("g-123".to_string()),
            ..NewUser::default()
        });

        assert_eq!(directory.get_user_by_email("a@x.com").unwrap().id, 1);
        assert!(directory.get_user_by_email("missing@x.com").is_none());
        assert_eq!(directory.get_user_by_provider_id("g-123").unwrap().id, 2);
        assert!(directory.get_user_by_provider_id("g-999").is_none());
    }

    #[test]
    fn test_register_user_reports_email_conflict() {
        let directory = UserDirectory::new();

        let first = directory.register_user(new_user("a@x.com"));
        let second = directory.register_user(new_user("a@x.com"));

        assert!(matches!(first, CreateOutcome::Created(_)));
        match second {
            CreateOutcome::Exists(user) => assert_eq!(user.id, 1),
            CreateOutcome::Created(_) => panic!("duplicate email must not create"),
        }
        assert_eq!(directory.user_count(), 1);
    }

    #[test]
    fn test_provider_resolution_is_idempotent() {
        let directory = UserDirectory::new();
        let provider_user = NewUser {
            email: "c@x.com".to_string(),
            provider: Some("google".to_string()),
            provider_id: Some("g-123".to_string()),
            display_name: Some("Cam".to_string()),
            ..NewUser::default()
        };

        let first = directory.find_or_create_provider_user(provider_user.clone());
        let second = directory.find_or_create_provider_user(provider_user);

        assert_eq!(first.id, second.id);
        assert_eq!(directory.user_count(), 1);
    }

    #[test]
    fn test_provider_resolution_falls_back_to_email() {
        let directory = UserDirectory::new();
        directory.create_user(new_user("a@x.com"));

        let resolved = directory.find_or_create_provider_user(NewUser {
            email: "a@x.com".to_string(),
            provider: Some("google".to_string()),
            provider_id: Some("g-123".to_string()),
            ..NewUser::default()
        });

        // Matched the existing email account instead of creating a new one
        assert_eq!(resolved.id, 1);
        assert_eq!(directory.user_count(), 1);
    }

    #[test]
    fn test_add_interest_is_idempotent() {
        let directory = UserDirectory::new();
        let user = directory.create_user(new_user("a@x.com"));

        directory.add_user_interest(user.id, "Yoga");
        directory.add_user_interest(user.id, "Yoga");

        assert_eq!(directory.get_user_interests(user.id), vec!["Yoga"]);
        assert_eq!(directory.get_user(user.id).unwrap().interests, vec!["Yoga"]);
    }

    #[test]
    fn test_add_interest_unknown_user_is_noop() {
        let directory = UserDirectory::new();

        directory.add_user_interest(42, "Yoga");

        assert!(directory.get_user_interests(42).is_empty());
        assert!(directory.get_users_by_interests(&["Yoga".to_string()]).is_empty());
    }

    #[test]
    fn test_interest_sequence_preserves_insertion_order() {
        let directory = UserDirectory::new();
        let user = directory.create_user(new_user("a@x.com"));

        directory.add_user_interest(user.id, "Yoga");
        directory.add_user_interest(user.id, "Climbing");
        directory.add_user_interest(user.id, "Yoga");

        assert_eq!(
            directory.get_user(user.id).unwrap().interests,
            vec!["Yoga", "Climbing"]
        );
    }

    #[test]
    fn test_users_by_interests_deduplicates_and_sorts() {
        let directory = UserDirectory::new();
        for email in ["a@x.com", "b@x.com", "c@x.com"] {
            directory.create_user(new_user(email));
        }
        directory.add_user_interest(2, "Yoga");
        directory.add_user_interest(2, "Climbing");
        directory.add_user_interest(3, "Climbing");
        directory.add_user_interest(1, "Chess");

        let matched = directory
            .get_users_by_interests(&["Yoga".to_string(), "Climbing".to_string()]);
        let ids: Vec<u64> = matched.iter().map(|user| user.id).collect();

        // User 2 overlaps on both interests but appears once
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_users_by_empty_interest_list_is_empty() {
        let directory = UserDirectory::new();
        let user = directory.create_user(new_user("a@x.com"));
        directory.add_user_interest(user.id, "Yoga");

        assert!(directory.get_users_by_interests(&[]).is_empty());
    }

    #[test]
    fn test_connection_overwrites_to_pending() {
        let directory = UserDirectory::new();
        directory.create_user(new_user("a@x.com"));
        directory.create_user(new_user("b@x.com"));

        directory.create_user_connection(1, 2);
        directory.create_user_connection(1, 2);

        let connections = directory.get_user_connections(1);
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].id, 2);
    }

    #[test]
    fn test_connections_skip_unresolvable_targets() {
        let directory = UserDirectory::new();
        directory.create_user(new_user("a@x.com"));

        // Target 99 never existed; the record is kept but never resolved
        directory.create_user_connection(1, 99);
        directory.create_user_connection(1, 1);

        let connections = directory.get_user_connections(1);
        assert_eq!(connections.len(), 1);
        assert_eq!(connections[0].id, 1);
    }

    #[test]
    fn test_connections_for_unknown_user_are_empty() {
        let directory = UserDirectory::new();
        assert!(directory.get_user_connections(7).is_empty());
    }
}
