use gloo::timers::future::TimeoutFuture;
use tasklist_core::RowView;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  FocusEvent,
  Html,
  KeyboardEvent,
  MouseEvent,
  Properties,
  TargetCast,
  TransitionEvent,
  classes,
  function_component,
  html,
  use_effect_with,
  use_node_ref
};

use super::RowActions;

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub row:            RowView,
  pub entry_delay_ms: u32,
  pub actions:        RowActions
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let row = &props.row;
  let id = row.id;
  let edit_ref = use_node_ref();

  {
    let entered =
      props.actions.entered.clone();
    let delay = props.entry_delay_ms;
    use_effect_with(
      (id, row.entering),
      move |(id, entering)| {
        if *entering {
          let id = *id;
          wasm_bindgen_futures::spawn_local(
            async move {
              TimeoutFuture::new(delay)
                .await;
              entered.emit(id);
            }
          );
        }
        || ()
      }
    );
  }

  {
    let edit_ref = edit_ref.clone();
    use_effect_with(
      row.editing,
      move |editing| {
        if *editing
          && let Some(input) = edit_ref
            .cast::<HtmlInputElement>()
        {
          if let Err(err) = input.focus() {
            tracing::debug!(
              error = ?err,
              "failed to focus edit input"
            );
          }
          input.select();
        }
        || ()
      }
    );
  }

  let class = classes!(
    "task-item",
    row.completed.then_some("completed"),
    row.entering.then_some("new-item"),
    row.removing.then_some("removing")
  );

  let on_toggle = {
    let toggle =
      props.actions.toggle.clone();
    move |_: MouseEvent| toggle.emit(id)
  };
  let on_edit = {
    let start_edit =
      props.actions.start_edit.clone();
    move |_: MouseEvent| {
      start_edit.emit(id)
    }
  };
  let on_delete = {
    let delete =
      props.actions.delete.clone();
    move |_: MouseEvent| delete.emit(id)
  };
  let on_transition_end = {
    let removed =
      props.actions.removed.clone();
    let removing = row.removing;
    Callback::from(
      move |_: TransitionEvent| {
        if removing {
          removed.emit(id);
        }
      }
    )
  };

  let text = if row.editing {
    let on_keydown = {
      let commit =
        props.actions.commit_edit.clone();
      let cancel =
        props.actions.cancel_edit.clone();
      move |e: KeyboardEvent| {
        match e.key().as_str() {
          | "Enter" => {
            let input: HtmlInputElement =
              e.target_unchecked_into();
            commit.emit((id, input.value()));
          }
          | "Escape" => cancel.emit(id),
          | _ => {}
        }
      }
    };
    let on_blur = {
      let commit =
        props.actions.commit_edit.clone();
      move |e: FocusEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        commit.emit((id, input.value()));
      }
    };

    html! {
        <input
            ref={edit_ref}
            class="edit-input"
            type="text"
            value={row.text.clone()}
            onkeydown={on_keydown}
            onblur={on_blur}
        />
    }
  } else {
    html! { <span class="task-text">{ &row.text }</span> }
  };

  html! {
      <li
          class={class}
          data-id={id.to_string()}
          ontransitionend={on_transition_end}
      >
          <input
              type="checkbox"
              class="complete-checkbox"
              checked={row.completed}
              onclick={on_toggle}
          />
          { text }
          <div class="action-buttons">
              <button class="edit-btn" aria-label="Edit Task" onclick={on_edit}>
                  <i class="fi fi-rr-pencil"></i>
              </button>
              <button class="delete-btn" aria-label="Delete Task" onclick={on_delete}>
                  <i class="fi fi-rr-trash"></i>
              </button>
          </div>
      </li>
  }
}
