pub mod storage;

use crate::error::Result;
use storage::KeyValueStore;

pub const PREMIUM_KEY: &str = "premiumUnlocked";
pub const UNLOCKED_SENTINEL: &str = "1";

/// Premium gate over a persistent store. There is no path back to locked.
pub struct UnlockGate<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> UnlockGate<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn persisted(&self) -> Result<bool> {
        Ok(self.store.get(PREMIUM_KEY)?.as_deref() == Some(UNLOCKED_SENTINEL))
    }

    pub fn is_unlocked(&self, query_flag: bool) -> Result<bool> {
        Ok(query_flag || self.persisted()?)
    }

    /// Writes the sentinel. Returns `false` when the gate was already open.
    pub fn set_unlocked(&mut self) -> Result<bool> {
        if self.persisted()? {
            return Ok(false);
        }
        self.store.set(PREMIUM_KEY, UNLOCKED_SENTINEL)?;
        tracing::info!("premium unlocked");
        Ok(true)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
