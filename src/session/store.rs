/**
 * Session Store
 *
 * Holds the current user, the derived authentication flag and the granted
 * permission set. Only the auth layer writes identity state; everything else
 * reads.
 *
 * # Invariants
 *
 * - `is_authenticated()` is true exactly when a user is loaded.
 * - The permission set always mirrors the current user's permission list;
 *   both are replaced inside the same write lock, so no reader can observe
 *   them disagreeing.
 *
 * # Permission checks
 *
 * Every permission query funnels through one guarded entry point: no loaded
 * user answers `false`, a super admin answers `true` regardless of the
 * permission list, and only then is the set itself consulted. The
 * super-admin bypass is an intentional rule of the capability model, kept in
 * a single place rather than scattered across call sites.
 *
 * # Sequencing
 *
 * The store carries an epoch that advances on every identity transition.
 * `sync_user` applies an update only when the caller's captured epoch is
 * still current, which lets the auth layer discard a "who am I" response
 * that lost the race against an explicit logout.
 */

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::identity::user::SessionUser;

#[derive(Debug, Default)]
struct SessionState {
    user: Option<SessionUser>,
    permissions: HashSet<String>,
}

/// In-memory session state container
///
/// Cheap to construct; intended to be created once per application shell
/// (or per test) and shared behind an `Arc`.
#[derive(Debug, Default)]
pub struct SessionStore {
    state: RwLock<SessionState>,
    epoch: AtomicU64,
}

impl SessionStore {
    /// Create an empty, unauthenticated store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current identity atomically
    ///
    /// The user record and the permission set are swapped under the same
    /// write lock, so `is_authenticated()` and the permission predicates can
    /// never disagree with the loaded user.
    pub fn set_user(&self, user: Option<SessionUser>) {
        let mut state = self.state.write().expect("session store lock poisoned");
        state.permissions = user
            .as_ref()
            .map(|u| u.permissions.iter().cloned().collect())
            .unwrap_or_default();
        state.user = user;
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    /// Clear all session state unconditionally
    ///
    /// Does not wait for any server acknowledgment; the caller owns the
    /// backend logout call and its outcome.
    pub fn logout(&self) {
        self.set_user(None);
    }

    /// Current identity epoch
    ///
    /// Capture before starting an identity fetch and pass to [`sync_user`]
    /// when the response arrives.
    ///
    /// [`sync_user`]: SessionStore::sync_user
    pub fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }

    /// Apply a fetched identity only if no transition happened in between
    ///
    /// Returns `true` if the update was applied. A mismatched epoch means a
    /// login, logout or another fetch completed while this request was in
    /// flight; the stale result is dropped so it cannot revive a session
    /// that was logged out.
    pub fn sync_user(&self, expected_epoch: u64, user: Option<SessionUser>) -> bool {
        let mut state = self.state.write().expect("session store lock poisoned");
        if self.epoch.load(Ordering::SeqCst) != expected_epoch {
            return false;
        }
        state.permissions = user
            .as_ref()
            .map(|u| u.permissions.iter().cloned().collect())
            .unwrap_or_default();
        state.user = user;
        self.epoch.fetch_add(1, Ordering::SeqCst);
        true
    }

    /// Snapshot of the current user, if any
    pub fn current_user(&self) -> Option<SessionUser> {
        self.state
            .read()
            .expect("session store lock poisoned")
            .user
            .clone()
    }

    /// True exactly when a user is loaded
    pub fn is_authenticated(&self) -> bool {
        self.state
            .read()
            .expect("session store lock poisoned")
            .user
            .is_some()
    }

    /// True if the current user holds the permission code
    pub fn has_permission(&self, code: &str) -> bool {
        self.check(|permissions| permissions.contains(code))
    }

    /// True if the current user holds at least one of the codes
    pub fn has_any_permission<S: AsRef<str>>(&self, codes: &[S]) -> bool {
        self.check(|permissions| codes.iter().any(|c| permissions.contains(c.as_ref())))
    }

    /// True if the current user holds every one of the codes
    pub fn has_all_permissions<S: AsRef<str>>(&self, codes: &[S]) -> bool {
        self.check(|permissions| codes.iter().all(|c| permissions.contains(c.as_ref())))
    }

    /// Direct super-admin flag read; false with no user loaded
    pub fn is_super_admin(&self) -> bool {
        self.state
            .read()
            .expect("session store lock poisoned")
            .user
            .as_ref()
            .is_some_and(|u| u.is_super_admin)
    }

    /// Direct team-member flag read; false with no user loaded
    pub fn is_team_member(&self) -> bool {
        self.state
            .read()
            .expect("session store lock poisoned")
            .user
            .as_ref()
            .is_some_and(|u| u.is_team_member)
    }

    /// Single entry point for all permission queries
    ///
    /// No user -> false. Super admin -> true, bypassing the set entirely.
    /// Otherwise the supplied test runs against the permission set.
    fn check<F>(&self, test: F) -> bool
    where
        F: FnOnce(&HashSet<String>) -> bool,
    {
        let state = self.state.read().expect("session store lock poisoned");
        match &state.user {
            None => false,
            Some(user) if user.is_super_admin => true,
            Some(_) => test(&state.permissions),
        }
    }
}
