mod filter_bar;
mod task_form;
mod task_list;
mod task_list_row;

pub use filter_bar::FilterBar;
pub use task_form::TaskForm;
pub use task_list::{
  RowActions,
  TaskList
};
pub use task_list_row::TaskListRow;
