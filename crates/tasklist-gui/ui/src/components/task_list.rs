use tasklist_core::{
  ListBody,
  ListView
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

/// Row-level intents, each forwarded to the matching store
/// operation.
#[derive(Clone, PartialEq)]
pub struct RowActions {
  pub toggle:      Callback<u64>,
  pub start_edit:  Callback<u64>,
  pub commit_edit: Callback<(u64, String)>,
  pub cancel_edit: Callback<u64>,
  pub delete:      Callback<u64>,
  /// Fired once the removal transition of a row has ended.
  pub removed:     Callback<u64>,
  pub entered:     Callback<u64>
}

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub view:           ListView,
  pub entry_delay_ms: u32,
  pub actions:        RowActions
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  match &props.view.body {
    | ListBody::Placeholder(message) => {
      html! {
          <ul id="task-list">
              <li class="empty-message">{ message }</li>
          </ul>
      }
    }
    | ListBody::Rows(rows) => {
      html! {
          <ul id="task-list">
              {
                  for rows.iter().cloned().map(|row| html! {
                      <TaskListRow
                          key={row.id.to_string()}
                          row={row.clone()}
                          entry_delay_ms={props.entry_delay_ms}
                          actions={props.actions.clone()}
                      />
                  })
              }
          </ul>
      }
    }
  }
}
