use std::collections::{
  BTreeMap,
  BTreeSet
};

use anyhow::Context;
use tracing::{
  debug,
  warn
};

use crate::task::Task;

/// A string-keyed slot store that survives page reloads.
pub trait KeyValueStore {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>;

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  slots: BTreeMap<String, String>
}

impl MemoryStore {
  pub fn with_item(
    key: &str,
    value: &str
  ) -> Self {
    let mut store = Self::default();
    store
      .slots
      .insert(key.to_string(), value.to_string());
    store
  }

  pub fn raw(
    &self,
    key: &str
  ) -> Option<&str> {
    self.slots.get(key).map(String::as_str)
  }
}

impl KeyValueStore for MemoryStore {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    Ok(self.slots.get(key).cloned())
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    self
      .slots
      .insert(key.to_string(), value.to_string());
    Ok(())
  }
}

#[tracing::instrument(skip(tasks), fields(count = tasks.len()))]
pub fn encode_tasks(
  tasks: &[Task]
) -> anyhow::Result<String> {
  serde_json::to_string(tasks)
    .context("failed to encode task list")
}

#[tracing::instrument(skip(raw))]
pub fn decode_tasks(
  raw: &str
) -> anyhow::Result<Vec<Task>> {
  let tasks: Vec<Task> =
    serde_json::from_str(raw).context(
      "failed parsing persisted task \
       list"
    )?;
  debug!(
    count = tasks.len(),
    "decoded task list"
  );
  Ok(tasks)
}

/// Drops records that break the list invariants: blank text
/// and ids already seen earlier in the list.
pub fn retain_valid(
  tasks: &mut Vec<Task>
) {
  let before = tasks.len();
  let mut seen = BTreeSet::new();
  tasks.retain(|task| {
    task.has_valid_text()
      && seen.insert(task.id)
  });

  if tasks.len() != before {
    warn!(
      before,
      after = tasks.len(),
      "dropped invalid persisted tasks"
    );
  }
}
