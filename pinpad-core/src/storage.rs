//! The storage collaborator: who owns the authoritative PIN.
//!
//! The gateway only ever sees `dyn Storage`, so the persistence technology
//! can change without touching the endpoint.

use std::{collections::BTreeMap, sync::RwLock};

use async_trait::async_trait;
use chrono::Utc;

use crate::{NewPinCode, NewUser, PinCandidate, PinCode, StorageError, User};

/// Capability interface over the PIN and user tables.
///
/// Implementations must be `Send + Sync` so one instance can serve every
/// request handler.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Look up a user by ID.
    async fn get_user(&self, id: u32) -> Result<Option<User>, StorageError>;

    /// Look up a user by username.
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError>;

    /// Insert a user and return the stored record.
    ///
    /// # Errors
    /// Returns [`StorageError::Duplicate`] if the username is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, StorageError>;

    /// Insert a PIN code and return the stored record.
    async fn create_pin_code(&self, pin: NewPinCode) -> Result<PinCode, StorageError>;

    /// Return `true` if `pin` matches a stored PIN code.
    ///
    /// Must not mutate any state.
    async fn validate_pin(&self, pin: &PinCandidate) -> Result<bool, StorageError>;
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<u32, User>,
    pin_codes: BTreeMap<u32, PinCode>,
    next_user_id: u32,
    next_pin_id: u32,
}

/// Process-local [`Storage`] backed by `RwLock`-guarded maps.
///
/// IDs are assigned sequentially from 1, per table.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

impl MemoryStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, Tables>, StorageError> {
        self.tables
            .read()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_owned()))
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Tables>, StorageError> {
        self.tables
            .write()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_owned()))
    }
}

fn next_id(counter: &mut u32) -> u32 {
    *counter += 1;
    *counter
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get_user(&self, id: u32) -> Result<Option<User>, StorageError> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StorageError> {
        Ok(self
            .read()?
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StorageError> {
        let mut tables = self.write()?;
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(StorageError::Duplicate { field: "username", value: user.username });
        }
        let id = next_id(&mut tables.next_user_id);
        let record = User { id, username: user.username, password: user.password };
        tables.users.insert(id, record.clone());
        Ok(record)
    }

    async fn create_pin_code(&self, pin: NewPinCode) -> Result<PinCode, StorageError> {
        let mut tables = self.write()?;
        let id = next_id(&mut tables.next_pin_id);
        let record = PinCode { id, pin: pin.pin, created_at: Utc::now() };
        tables.pin_codes.insert(id, record.clone());
        tracing::debug!(pin_code_id = id, "pin code stored");
        Ok(record)
    }

    async fn validate_pin(&self, pin: &PinCandidate) -> Result<bool, StorageError> {
        Ok(self
            .read()?
            .pin_codes
            .values()
            .any(|code| code.pin == pin.as_str()))
    }
}
