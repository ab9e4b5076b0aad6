pub mod config;
pub mod datastore;
pub mod filter;
pub mod render;
pub mod store;
pub mod task;

pub use config::Config;
pub use datastore::{
  KeyValueStore,
  MemoryStore
};
pub use filter::Filter;
pub use render::{
  ListBody,
  ListView,
  RenderSurface,
  RowView
};
pub use store::TaskStore;
pub use task::{
  EditSession,
  Task
};
use tracing::info;

/// Builds a store over `storage` and immediately loads the
/// persisted list, which also produces the first render.
#[tracing::instrument(skip_all)]
pub fn open<S, R>(
  storage: S,
  surface: R,
  config: Config
) -> TaskStore<S, R>
where
  S: KeyValueStore,
  R: RenderSurface
{
  info!(
    storage_key = %config.storage_key,
    "starting task list"
  );
  let mut store =
    TaskStore::new(storage, surface, config);
  store.load();
  store
}
