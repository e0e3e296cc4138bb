use super::model::Session;
use crate::error::Result;
use crate::models::{Admin, AdminPatch};
use crate::storage::KeyValueStore;
use std::sync::{Arc, PoisonError, RwLock};

/// Storage key holding the bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Storage key holding the JSON-serialized [`Admin`].
pub const ADMIN_USER_KEY: &str = "admin_user";

/// Single source of truth for the logged-in admin.
///
/// Share it behind an `Arc` with the transport client and any caller that
/// needs to read or change the session. State only changes through
/// [`set_auth`](Self::set_auth), [`logout`](Self::logout) and
/// [`update_user`](Self::update_user); each replaces the whole snapshot.
pub struct SessionStore {
    state: RwLock<Session>,
    storage: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    /// Creates a store, rehydrating from `storage` when both entries are present.
    ///
    /// A missing, half-present or undecodable pair yields an empty session;
    /// that condition is logged, not returned.
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let state = Self::rehydrate(storage.as_ref());
        Self {
            state: RwLock::new(state),
            storage,
        }
    }

    fn rehydrate(storage: &dyn KeyValueStore) -> Session {
        let token = match storage.get(AUTH_TOKEN_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("[Session] Failed to read persisted token: {}", e);
                return Session::default();
            }
        };
        let user_json = match storage.get(ADMIN_USER_KEY) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!("[Session] Failed to read persisted user: {}", e);
                return Session::default();
            }
        };

        match (token, user_json) {
            (Some(token), Some(user_json)) => match serde_json::from_str::<Admin>(&user_json) {
                Ok(user) => {
                    tracing::debug!("[Session] Restored session for admin {}", user.id);
                    Session::authenticated(user, token)
                }
                Err(e) => {
                    tracing::warn!("[Session] Ignoring undecodable persisted user: {}", e);
                    Session::default()
                }
            },
            (None, None) => Session::default(),
            _ => {
                tracing::warn!("[Session] Ignoring incomplete persisted session");
                Session::default()
            }
        }
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> Session {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    /// Current admin, if any.
    pub fn user(&self) -> Option<Admin> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    /// Records a successful login or refresh.
    ///
    /// Both entries are persisted first; if that fails the in-memory state is
    /// left as it was.
    pub fn set_auth(&self, user: Admin, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        let user_json = serde_json::to_string(&user)?;

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        self.storage.set_many(&[
            (AUTH_TOKEN_KEY, token.as_str()),
            (ADMIN_USER_KEY, user_json.as_str()),
        ])?;

        tracing::info!("[Session] Authenticated as admin {}", user.id);
        *state = Session::authenticated(user, token);
        Ok(())
    }

    /// Clears the session.
    ///
    /// The in-memory state is always cleared; an error removing the persisted
    /// entries is returned afterwards.
    pub fn logout(&self) -> Result<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state = Session::default();
        drop(state);

        tracing::info!("[Session] Logged out");
        self.storage.remove(&[AUTH_TOKEN_KEY, ADMIN_USER_KEY])
    }

    /// Merges `patch` into the current admin and re-persists it.
    ///
    /// Does nothing when no admin is logged in. The token is never touched.
    pub fn update_user(&self, patch: &AdminPatch) -> Result<()> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let Some(current) = state.user.as_ref() else {
            tracing::debug!("[Session] update_user ignored: not authenticated");
            return Ok(());
        };

        let merged = current.merged(patch);
        let user_json = serde_json::to_string(&merged)?;
        self.storage.set(ADMIN_USER_KEY, &user_json)?;

        state.user = Some(merged);
        Ok(())
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let session = self.snapshot();
        f.debug_struct("SessionStore")
            .field("user", &session.user.as_ref().map(|u| &u.id))
            .field("is_authenticated", &session.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdminError;
    use crate::models::{AdminRole, Timestamp};
    use crate::storage::MemoryKeyValueStore;

    fn admin() -> Admin {
        Admin {
            id: "1".to_string(),
            name: "Admin User".to_string(),
            email: "a@b.com".to_string(),
            profile_picture: None,
            role: AdminRole::Admin,
            created_at: Timestamp::new("2024-01-15T10:00:00Z"),
        }
    }

    fn memory_store() -> (Arc<MemoryKeyValueStore>, SessionStore) {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let store = SessionStore::new(storage.clone());
        (storage, store)
    }

    /// Storage whose writes always fail.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(AdminError::storage("read-only"))
        }

        fn remove(&self, _keys: &[&str]) -> Result<()> {
            Err(AdminError::storage("read-only"))
        }
    }

    #[test]
    fn test_starts_empty() {
        let (_, store) = memory_store();
        let session = store.snapshot();
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
        assert!(session.token.is_none());
    }

    #[test]
    fn test_set_auth_then_logout() {
        let (storage, store) = memory_store();

        store.set_auth(admin(), "tok").unwrap();
        let session = store.snapshot();
        assert!(session.is_authenticated());
        assert_eq!(session.user, Some(admin()));
        assert_eq!(session.token.as_deref(), Some("tok"));
        assert_eq!(storage.get(AUTH_TOKEN_KEY).unwrap().as_deref(), Some("tok"));

        store.logout().unwrap();
        let session = store.snapshot();
        assert!(!session.is_authenticated());
        assert!(session.user.is_none());
        assert!(session.token.is_none());
        assert!(storage.is_empty());
    }

    #[test]
    fn test_update_user_when_unauthenticated_is_noop() {
        let (storage, store) = memory_store();
        let before = store.snapshot();

        store.update_user(&AdminPatch::name("X")).unwrap();

        assert_eq!(store.snapshot(), before);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_update_user_merges_and_persists() {
        let (storage, store) = memory_store();
        store.set_auth(admin(), "tok").unwrap();

        store.update_user(&AdminPatch::name("X")).unwrap();

        let user = store.user().unwrap();
        assert_eq!(user.name, "X");
        assert_eq!(user.email, "a@b.com");
        assert_eq!(user.id, "1");
        assert_eq!(user.role, AdminRole::Admin);
        assert_eq!(store.token().as_deref(), Some("tok"));

        let persisted: Admin =
            serde_json::from_str(&storage.get(ADMIN_USER_KEY).unwrap().unwrap()).unwrap();
        assert_eq!(persisted.name, "X");
    }

    #[test]
    fn test_reload_reproduces_session() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let first = SessionStore::new(storage.clone());
        first.set_auth(admin(), "tok").unwrap();
        let before = first.snapshot();
        drop(first);

        let restarted = SessionStore::new(storage);
        assert_eq!(restarted.snapshot(), before);
        assert!(restarted.is_authenticated());
    }

    #[test]
    fn test_incomplete_persisted_session_starts_empty() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        storage.set(AUTH_TOKEN_KEY, "tok").unwrap();

        let store = SessionStore::new(storage);
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_corrupt_persisted_user_starts_empty() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        storage.set(AUTH_TOKEN_KEY, "tok").unwrap();
        storage.set(ADMIN_USER_KEY, "{not json").unwrap();

        let store = SessionStore::new(storage);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_failed_persist_leaves_state_unchanged() {
        let store = SessionStore::new(Arc::new(ReadOnlyStore));

        let result = store.set_auth(admin(), "tok");
        assert!(matches!(result, Err(AdminError::Storage(_))));
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_logout_clears_state_even_if_storage_fails() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        storage.set(AUTH_TOKEN_KEY, "tok").unwrap();
        storage
            .set(ADMIN_USER_KEY, &serde_json::to_string(&admin()).unwrap())
            .unwrap();
        let restored = SessionStore::new(storage).snapshot();
        assert!(restored.is_authenticated());

        // Same restored state, but backed by storage that refuses writes.
        let store = SessionStore {
            state: RwLock::new(restored),
            storage: Arc::new(ReadOnlyStore),
        };
        assert!(store.logout().is_err());
        assert!(!store.is_authenticated());
    }
}
