use std::collections::BTreeSet;

use tracing::{
  debug,
  error,
  info
};

use crate::config::Config;
use crate::datastore::{
  self,
  KeyValueStore
};
use crate::filter::Filter;
use crate::render::{
  self,
  ListView,
  RenderSurface
};
use crate::task::{
  EditSession,
  IdSource,
  Task
};

/// Owns the task list and everything derived from it.
///
/// Every mutating operation writes the whole list back to
/// `storage` and then hands a fresh [`ListView`] to `surface`.
/// Operations addressed to ids that no longer exist are no-ops.
pub struct TaskStore<S, R> {
  storage:  S,
  surface:  R,
  config:   Config,
  tasks:    Vec<Task>,
  filter:   Filter,
  edit:     Option<EditSession>,
  removing: BTreeSet<u64>,
  ids:      IdSource
}

impl<S, R> TaskStore<S, R>
where
  S: KeyValueStore,
  R: RenderSurface
{
  pub fn new(
    storage: S,
    surface: R,
    config: Config
  ) -> Self {
    Self {
      storage,
      surface,
      config,
      tasks: Vec::new(),
      filter: Filter::default(),
      edit: None,
      removing: BTreeSet::new(),
      ids: IdSource::default()
    }
  }

  /// Replaces the in-memory list with the persisted one. A
  /// missing slot yields an empty list, and so does a corrupt
  /// one after logging the parse failure.
  #[tracing::instrument(skip(self), fields(key = %self.config.storage_key))]
  pub fn load(&mut self) {
    self.tasks = match self
      .storage
      .get_item(&self.config.storage_key)
    {
      | Ok(Some(raw)) => {
        match datastore::decode_tasks(&raw) {
          | Ok(mut tasks) => {
            datastore::retain_valid(&mut tasks);
            tasks
          }
          | Err(error) => {
            error!(
              error = %format!("{error:#}"),
              "persisted tasks are corrupt; \
               starting empty"
            );
            Vec::new()
          }
        }
      }
      | Ok(None) => {
        debug!("no persisted tasks");
        Vec::new()
      }
      | Err(error) => {
        error!(
          error = %format!("{error:#}"),
          "failed reading persisted tasks"
        );
        Vec::new()
      }
    };

    for task in &self.tasks {
      self.ids.observe(task.id);
    }
    self.edit = None;
    self.removing.clear();

    info!(
      count = self.tasks.len(),
      "loaded tasks"
    );
    self.render();
  }

  /// Prepends a new task. Blank input is ignored and `None`
  /// returned.
  #[tracing::instrument(skip(self, raw_text))]
  pub fn add(
    &mut self,
    raw_text: &str
  ) -> Option<u64> {
    let text = raw_text.trim();
    if text.is_empty() {
      debug!("ignoring blank task text");
      return None;
    }

    let id = self.ids.next_id();
    self
      .tasks
      .insert(0, Task::new_pending(id, text.to_string()));
    info!(id, "added task");

    self.persist();
    self.render();
    Some(id)
  }

  /// Ends the entry animation for `id`. The flag is never
  /// persisted, so this only re-renders.
  #[tracing::instrument(skip(self))]
  pub fn clear_transient(&mut self, id: u64) {
    let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id && task.transient)
    else {
      return;
    };
    task.transient = false;
    self.render();
  }

  #[tracing::instrument(skip(self))]
  pub fn toggle_complete(&mut self, id: u64) {
    if self.edit.is_some() {
      debug!("edit in progress; ignoring toggle");
      return;
    }

    let Some(task) =
      self.tasks.iter_mut().find(|task| task.id == id)
    else {
      debug!("toggle for unknown task");
      return;
    };
    task.completed = !task.completed;
    debug!(
      completed = task.completed,
      "toggled task"
    );

    self.persist();
    self.render();
  }

  /// Opens the single edit session. Returns `false` when
  /// another session is already open, or `id` is unknown or
  /// already on its way out.
  #[tracing::instrument(skip(self))]
  pub fn start_edit(&mut self, id: u64) -> bool {
    if let Some(session) = self.edit {
      debug!(
        editing = session.task_id,
        "edit already in progress"
      );
      return false;
    }
    if !self.tasks.iter().any(|task| task.id == id) {
      debug!("edit for unknown task");
      return false;
    }
    if self.removing.contains(&id) {
      debug!("edit for a task being removed");
      return false;
    }

    self.edit = Some(EditSession { task_id: id });
    self.render();
    true
  }

  /// Closes the session for `id`, keeping `value` only if it
  /// trims to something non-empty. Always persists and renders
  /// when a matching session was open.
  #[tracing::instrument(skip(self, value))]
  pub fn commit_edit(
    &mut self,
    id: u64,
    value: &str
  ) {
    if !self.close_session(id) {
      return;
    }

    let text = value.trim();
    match self.tasks.iter_mut().find(|task| task.id == id) {
      | Some(task) if !text.is_empty() => {
        task.text = text.to_string();
        debug!("updated task text");
      }
      | Some(_) => {
        debug!("blank edit discarded");
      }
      | None => {
        debug!("edited task no longer exists");
      }
    }

    self.persist();
    self.render();
  }

  #[tracing::instrument(skip(self))]
  pub fn cancel_edit(&mut self, id: u64) {
    if self.close_session(id) {
      self.render();
    }
  }

  /// First half of a delete: flags the row as removing so the
  /// surface can play its exit transition. The data is only
  /// dropped by [`Self::finalize_remove`].
  #[tracing::instrument(skip(self))]
  pub fn begin_remove(&mut self, id: u64) -> bool {
    if self.edit.is_some() {
      debug!("edit in progress; ignoring delete");
      return false;
    }

    let on_screen = self.tasks.iter().any(|task| {
      task.id == id && self.filter.matches(task)
    });
    if !on_screen {
      debug!("delete for a row not in view");
      return false;
    }
    if !self.removing.insert(id) {
      return false;
    }

    self.render();
    true
  }

  /// Second half of a delete, driven by the surface's
  /// transition-complete signal. Acts once per
  /// [`Self::begin_remove`].
  #[tracing::instrument(skip(self))]
  pub fn finalize_remove(&mut self, id: u64) {
    if !self.removing.remove(&id) {
      debug!("no pending removal");
      return;
    }

    self.tasks.retain(|task| task.id != id);
    if self
      .edit
      .is_some_and(|session| session.task_id == id)
    {
      self.edit = None;
    }
    info!(
      remaining = self.tasks.len(),
      "removed task"
    );

    self.persist();
    self.render();
  }

  #[tracing::instrument(skip(self))]
  pub fn set_filter(&mut self, filter: Filter) {
    self.filter = filter;
    self.render();
  }

  pub fn view(&self) -> ListView {
    render::project(
      &self.tasks,
      self.filter,
      self.edit,
      &self.removing,
      &self.config.empty_message
    )
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn filter(&self) -> Filter {
    self.filter
  }

  pub fn edit_session(
    &self
  ) -> Option<EditSession> {
    self.edit
  }

  pub fn config(&self) -> &Config {
    &self.config
  }

  pub fn storage(&self) -> &S {
    &self.storage
  }

  fn close_session(&mut self, id: u64) -> bool {
    match self.edit {
      | Some(session) if session.task_id == id => {
        self.edit = None;
        true
      }
      | _ => {
        debug!("no open edit session for task");
        false
      }
    }
  }

  fn persist(&mut self) {
    let result = datastore::encode_tasks(&self.tasks)
      .and_then(|raw| {
        self
          .storage
          .set_item(&self.config.storage_key, &raw)
      });

    if let Err(error) = result {
      error!(
        error = %format!("{error:#}"),
        "failed to persist tasks"
      );
    }
  }

  fn render(&mut self) {
    // A row that left the view never finishes its transition.
    let tasks = &self.tasks;
    let filter = self.filter;
    self.removing.retain(|id| {
      tasks.iter().any(|task| {
        task.id == *id && filter.matches(task)
      })
    });

    let view = self.view();
    self.surface.render(&view);
  }
}
