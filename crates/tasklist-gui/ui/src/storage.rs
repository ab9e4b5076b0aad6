use anyhow::anyhow;
use tasklist_core::{
  Config,
  KeyValueStore,
  ListView,
  RenderSurface
};
use yew::UseStateHandle;

const CONFIG_TOML: &str =
  include_str!("../assets/tasklist.toml");

/// The browser's `localStorage`, looked up on every access so a
/// storage that disappears mid-session only fails that call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn local_storage()
-> anyhow::Result<web_sys::Storage> {
  web_sys::window()
    .ok_or_else(|| anyhow!("no window"))?
    .local_storage()
    .map_err(|err| {
      anyhow!(
        "localStorage access denied: \
         {err:?}"
      )
    })?
    .ok_or_else(|| {
      anyhow!("localStorage unavailable")
    })
}

impl KeyValueStore for LocalStorage {
  fn get_item(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>> {
    local_storage()?
      .get_item(key)
      .map_err(|err| {
        anyhow!(
          "failed reading {key}: {err:?}"
        )
      })
  }

  fn set_item(
    &mut self,
    key: &str,
    value: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .set_item(key, value)
      .map_err(|err| {
        anyhow!(
          "failed writing {key}: {err:?}"
        )
      })
  }
}

/// Pushes each projection into component state, which
/// schedules the next yew render.
pub struct ViewSink {
  view: UseStateHandle<ListView>
}

impl ViewSink {
  pub fn new(
    view: UseStateHandle<ListView>
  ) -> Self {
    Self { view }
  }
}

impl RenderSurface for ViewSink {
  fn render(&mut self, view: &ListView) {
    tracing::trace!(
      filter = %view.filter,
      rows = view.rows().len(),
      "render"
    );
    self.view.set(view.clone());
  }
}

pub fn load_config() -> Config {
  match Config::from_toml_str(CONFIG_TOML)
  {
    | Ok(config) => {
      tracing::info!(
        storage_key = %config.storage_key,
        "loaded frontend config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(
        error = %format!("{error:#}"),
        "failed to parse frontend \
         config; using defaults"
      );
      Config::default()
    }
  }
}
