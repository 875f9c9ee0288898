use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use anyhow::bail;
use tracing::debug;

/// Raw string key-value storage the task list and theme are persisted to.
pub trait KeyValueStore {
    /// `Ok(None)` means the key has never been written.
    fn load(&self, key: &str) -> anyhow::Result<Option<String>>;

    fn save(&self, key: &str, raw: &str) -> anyhow::Result<()>;
}

/// In-process store. Clones share the same entries, so a caller can keep a
/// handle and observe what a session wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, raw: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Makes every following `save` fail, as a full quota would.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, raw: &str) -> anyhow::Result<()> {
        if self.fail_writes.get() {
            bail!("memory store rejected write to {key}");
        }
        debug!(key, bytes = raw.len(), "memory store write");
        self.entries
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
        Ok(())
    }
}
