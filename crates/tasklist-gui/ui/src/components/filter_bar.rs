use tasklist_core::Filter;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
  pub active:    Filter,
  pub on_select: Callback<String>
}

#[function_component(FilterBar)]
pub fn filter_bar(
  props: &FilterBarProps
) -> Html {
  let make_button = |filter: Filter| {
    let class = classes!(
      "filter-btn",
      (props.active == filter)
        .then_some("active")
    );
    let on_select =
      props.on_select.clone();
    let key = filter.as_key();
    html! {
        <button
            class={class}
            data-filter={key}
            onclick={move |_| on_select.emit(key.to_string())}
        >
            { filter.label() }
        </button>
    }
  };

  html! {
      <div id="filter-buttons">
          { for Filter::ALL.into_iter().map(make_button) }
      </div>
  }
}
