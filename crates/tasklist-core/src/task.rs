use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:        u64,
  pub text:      String,
  #[serde(default)]
  pub completed: bool,

  /// Set on creation so the first render can play the entry
  /// animation. Never written to storage.
  #[serde(skip)]
  pub transient: bool
}

impl Task {
  /// Builds a freshly added task. `text` must already be
  /// trimmed and non-empty.
  pub fn new_pending(
    id: u64,
    text: String
  ) -> Self {
    Self {
      id,
      text,
      completed: false,
      transient: true
    }
  }

  pub fn has_valid_text(&self) -> bool {
    !self.text.trim().is_empty()
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub struct EditSession {
  pub task_id: u64
}

/// Issues task ids from the wall clock, bumped past the last
/// issued value so two adds in the same millisecond still
/// get distinct ids.
#[derive(Debug, Clone, Default)]
pub struct IdSource {
  last: u64
}

impl IdSource {
  pub fn observe(&mut self, id: u64) {
    self.last = self.last.max(id);
  }

  pub fn next_id(&mut self) -> u64 {
    let now = chrono::Utc::now()
      .timestamp_millis()
      .max(0) as u64;
    self.next_after(now)
  }

  fn next_after(
    &mut self,
    now_ms: u64
  ) -> u64 {
    let id = now_ms
      .max(self.last.saturating_add(1));
    self.last = id;
    id
  }
}
