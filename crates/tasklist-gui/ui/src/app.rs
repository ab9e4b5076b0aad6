use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::log;
use tasklist_core::{
  Filter,
  ListView,
  TaskStore
};
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_state
};

use crate::components::{
  FilterBar,
  RowActions,
  TaskForm,
  TaskList
};
use crate::storage::{
  LocalStorage,
  ViewSink,
  load_config
};

type Store = TaskStore<LocalStorage, ViewSink>;

/// Runs `f` against the store unless an earlier handler still
/// holds it, which happens when a re-render fires an event
/// (a blur from a removed input) synchronously.
fn dispatch<T>(
  store: &Rc<RefCell<Store>>,
  action: &str,
  f: impl FnOnce(&mut Store) -> T
) -> Option<T> {
  match store.try_borrow_mut() {
    | Ok(mut store) => Some(f(&mut store)),
    | Err(_) => {
      tracing::debug!(
        action,
        "store busy; dropping nested event"
      );
      None
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config = use_state(load_config);
  let view = use_state(ListView::default);

  let store = {
    let view = view.clone();
    let config = (*config).clone();
    use_mut_ref(move || {
      TaskStore::new(
        LocalStorage,
        ViewSink::new(view),
        config
      )
    })
  };

  {
    let store = store.clone();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "loading persisted tasks"
      );
      dispatch(&store, "load", Store::load);
      || ()
    });
  }

  let on_submit = {
    let store = store.clone();
    Callback::from(move |text: String| {
      let added = dispatch(
        &store,
        "add",
        |store| store.add(&text)
      );
      if let Some(Some(id)) = added {
        ui_debug(
          "action.add",
          &format!("id={id}")
        );
      }
    })
  };

  let on_filter = {
    let store = store.clone();
    Callback::from(move |name: String| {
      match name.parse::<Filter>() {
        | Ok(filter) => {
          dispatch(
            &store,
            "set_filter",
            |store| store.set_filter(filter)
          );
        }
        | Err(error) => {
          tracing::warn!(%error, "ignoring filter selection");
        }
      }
    })
  };

  let actions = {
    let toggle = {
      let store = store.clone();
      Callback::from(move |id: u64| {
        dispatch(&store, "toggle", |store| {
          store.toggle_complete(id)
        });
      })
    };
    let start_edit = {
      let store = store.clone();
      Callback::from(move |id: u64| {
        let started =
          dispatch(&store, "start_edit", |store| {
            store.start_edit(id)
          });
        if started != Some(true) {
          ui_debug(
            "action.edit.rejected",
            &format!("id={id}")
          );
        }
      })
    };
    let commit_edit = {
      let store = store.clone();
      Callback::from(
        move |(id, value): (u64, String)| {
          dispatch(&store, "commit_edit", |store| {
            store.commit_edit(id, &value)
          });
        }
      )
    };
    let cancel_edit = {
      let store = store.clone();
      Callback::from(move |id: u64| {
        dispatch(&store, "cancel_edit", |store| {
          store.cancel_edit(id)
        });
      })
    };
    let delete = {
      let store = store.clone();
      Callback::from(move |id: u64| {
        dispatch(&store, "begin_remove", |store| {
          store.begin_remove(id)
        });
      })
    };
    let removed = {
      let store = store.clone();
      Callback::from(move |id: u64| {
        dispatch(&store, "finalize_remove", |store| {
          store.finalize_remove(id)
        });
      })
    };
    let entered = {
      let store = store.clone();
      Callback::from(move |id: u64| {
        dispatch(&store, "clear_transient", |store| {
          store.clear_transient(id)
        });
      })
    };

    RowActions {
      toggle,
      start_edit,
      commit_edit,
      cancel_edit,
      delete,
      removed,
      entered
    }
  };

  html! {
      <main class="container">
          <h1>{ "To-Do List" }</h1>
          <TaskForm on_submit={on_submit} />
          <FilterBar active={view.filter} on_select={on_filter} />
          <TaskList
              view={(*view).clone()}
              entry_delay_ms={config.entry_animation_ms}
              actions={actions}
          />
      </main>
  }
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
