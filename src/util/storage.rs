//! Durable session storage.
//!
//! The session survives page reloads through two `localStorage` slots:
//! `authToken` (the raw token) and `authUser` (the user serialized as
//! JSON). Both slots are written together and cleared together; a record
//! that is partial or fails to parse is wiped on read so the next read
//! starts clean. Requires a browser environment for the real backend.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "authToken";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "authUser";

/// The durable mirror of an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

/// Key/value backend holding the stored session record.
///
/// Implementations never panic on missing or corrupt data: `read` treats
/// an unparsable or half-written record exactly like an absent one, and
/// removes it so subsequent reads are clean.
pub trait SessionStorage {
    fn read(&self) -> Option<StoredSession>;
    fn write(&self, record: &StoredSession);
    fn clear(&self);
}

/// `localStorage`-backed storage. All operations are no-ops outside the
/// browser, so SSR renders as signed-out.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn read(&self) -> Option<StoredSession> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            let token = storage.get_item(TOKEN_KEY).ok().flatten();
            let user_json = storage.get_item(USER_KEY).ok().flatten();

            match (token, user_json) {
                (Some(token), Some(user_json)) => {
                    match serde_json::from_str::<User>(&user_json) {
                        Ok(user) => Some(StoredSession { token, user }),
                        Err(e) => {
                            log::warn!("discarding corrupt stored session: {e}");
                            self.clear();
                            None
                        }
                    }
                }
                (None, None) => None,
                // One slot without the other breaks the both-or-neither
                // invariant; drop the stray slot.
                _ => {
                    self.clear();
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&self, record: &StoredSession) {
        #[cfg(feature = "hydrate")]
        {
            let Ok(user_json) = serde_json::to_string(&record.user) else {
                return;
            };
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(TOKEN_KEY, &record.token);
                let _ = storage.set_item(USER_KEY, &user_json);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USER_KEY);
            }
        }
    }
}

/// In-memory storage mirroring the two browser slots. Used by tests, which
/// seed the raw slots directly to exercise the corrupt-record paths.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: RefCell<Slots>,
}

#[derive(Debug, Default)]
struct Slots {
    token: Option<String>,
    user_json: Option<String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the raw slots, bypassing serialization. Lets a test plant a
    /// corrupt or partial record.
    pub fn seed_raw(&self, token: Option<&str>, user_json: Option<&str>) {
        let mut slots = self.slots.borrow_mut();
        slots.token = token.map(str::to_owned);
        slots.user_json = user_json.map(str::to_owned);
    }

    /// Raw view of both slots, for asserting on what was persisted.
    pub fn raw(&self) -> (Option<String>, Option<String>) {
        let slots = self.slots.borrow();
        (slots.token.clone(), slots.user_json.clone())
    }
}

impl SessionStorage for MemoryStorage {
    fn read(&self) -> Option<StoredSession> {
        let (token, user_json) = {
            let slots = self.slots.borrow();
            (slots.token.clone(), slots.user_json.clone())
        };

        match (token, user_json) {
            (Some(token), Some(user_json)) => match serde_json::from_str::<User>(&user_json) {
                Ok(user) => Some(StoredSession { token, user }),
                Err(_) => {
                    self.clear();
                    None
                }
            },
            (None, None) => None,
            _ => {
                self.clear();
                None
            }
        }
    }

    fn write(&self, record: &StoredSession) {
        let Ok(user_json) = serde_json::to_string(&record.user) else {
            return;
        };
        let mut slots = self.slots.borrow_mut();
        slots.token = Some(record.token.clone());
        slots.user_json = Some(user_json);
    }

    fn clear(&self) {
        let mut slots = self.slots.borrow_mut();
        slots.token = None;
        slots.user_json = None;
    }
}
