use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  Properties,
  SubmitEvent,
  function_component,
  html,
  use_node_ref
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub on_submit: Callback<String>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let input_ref = use_node_ref();

  let onsubmit = {
    let input_ref = input_ref.clone();
    let on_submit =
      props.on_submit.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      if let Some(input) =
        input_ref.cast::<HtmlInputElement>()
      {
        on_submit.emit(input.value());
        input.set_value("");
      }
    })
  };

  html! {
      <form id="task-form" onsubmit={onsubmit}>
          <input
              ref={input_ref}
              id="task-input"
              type="text"
              placeholder="Add a new task..."
              autocomplete="off"
          />
          <button type="submit">{ "Add" }</button>
      </form>
  }
}
