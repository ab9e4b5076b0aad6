use std::collections::BTreeSet;

use crate::filter::Filter;
use crate::task::{
  EditSession,
  Task
};

/// One visible task, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
  pub id:        u64,
  pub text:      String,
  pub completed: bool,
  /// Plays the one-shot entry animation.
  pub entering:  bool,
  /// Awaiting the removal transition before the task is dropped.
  pub removing:  bool,
  /// Shows an input field instead of the text.
  pub editing:   bool
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBody {
  Placeholder(String),
  Rows(Vec<RowView>)
}

/// Everything a rendering surface needs to draw the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
  pub filter: Filter,
  pub body:   ListBody
}

impl ListView {
  pub fn rows(&self) -> &[RowView] {
    match &self.body {
      | ListBody::Rows(rows) => rows,
      | ListBody::Placeholder(_) => &[]
    }
  }

  pub fn row(
    &self,
    id: u64
  ) -> Option<&RowView> {
    self.rows().iter().find(|row| row.id == id)
  }

  pub fn visible_ids(&self) -> Vec<u64> {
    self.rows().iter().map(|row| row.id).collect()
  }
}

impl Default for ListView {
  fn default() -> Self {
    Self {
      filter: Filter::All,
      body:   ListBody::Rows(vec![])
    }
  }
}

pub trait RenderSurface {
  fn render(&mut self, view: &ListView);
}

impl<F> RenderSurface for F
where
  F: FnMut(&ListView)
{
  fn render(&mut self, view: &ListView) {
    self(view)
  }
}

/// Projects the list through `filter`. The result fully
/// replaces whatever was drawn before.
pub fn project(
  tasks: &[Task],
  filter: Filter,
  edit: Option<EditSession>,
  removing: &BTreeSet<u64>,
  placeholder: &str
) -> ListView {
  let rows: Vec<RowView> = tasks
    .iter()
    .filter(|task| filter.matches(task))
    .map(|task| RowView {
      id:        task.id,
      text:      task.text.clone(),
      completed: task.completed,
      entering:  task.transient,
      removing:  removing.contains(&task.id),
      editing:   edit.is_some_and(|session| {
        session.task_id == task.id
      })
    })
    .collect();

  let body = if rows.is_empty() {
    ListBody::Placeholder(placeholder.to_string())
  } else {
    ListBody::Rows(rows)
  };

  ListView { filter, body }
}

#[cfg(test)]
mod tests {
  use super::*;

  const EMPTY: &str = "nothing";

  fn task(
    id: u64,
    completed: bool
  ) -> Task {
    Task {
      id,
      text: format!("t{id}"),
      completed,
      transient: false
    }
  }

  #[test]
  fn projection_keeps_list_order_per_filter()
   {
    let tasks = vec![
      task(4, false),
      task(3, true),
      task(2, false),
      task(1, true),
    ];
    let none = BTreeSet::new();

    let all = project(
      &tasks,
      Filter::All,
      None,
      &none,
      EMPTY
    );
    assert_eq!(all.visible_ids(), vec![
      4, 3, 2, 1
    ]);

    let active = project(
      &tasks,
      Filter::Active,
      None,
      &none,
      EMPTY
    );
    assert_eq!(active.visible_ids(), vec![
      4, 2
    ]);

    let done = project(
      &tasks,
      Filter::Completed,
      None,
      &none,
      EMPTY
    );
    assert_eq!(done.visible_ids(), vec![
      3, 1
    ]);
    assert_eq!(done.filter, Filter::Completed);
  }

  #[test]
  fn empty_projection_renders_placeholder() {
    let tasks = vec![task(1, false)];
    let view = project(
      &tasks,
      Filter::Completed,
      None,
      &BTreeSet::new(),
      EMPTY
    );
    assert_eq!(
      view.body,
      ListBody::Placeholder(EMPTY.to_string())
    );
    assert!(view.rows().is_empty());
  }

  #[test]
  fn row_flags_follow_session_and_marks() {
    let mut fresh = task(2, false);
    fresh.transient = true;
    let tasks = vec![fresh, task(1, false)];
    let removing = BTreeSet::from([1]);

    let view = project(
      &tasks,
      Filter::All,
      Some(EditSession { task_id: 2 }),
      &removing,
      EMPTY
    );

    let fresh_row =
      view.row(2).expect("row 2");
    assert!(fresh_row.entering);
    assert!(fresh_row.editing);
    assert!(!fresh_row.removing);

    let old_row = view.row(1).expect("row 1");
    assert!(old_row.removing);
    assert!(!old_row.editing);
    assert!(!old_row.entering);
  }
}
