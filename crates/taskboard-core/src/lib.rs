pub mod config;
pub mod draft;
pub mod drag_drop;
pub mod filter;
pub mod remote;
pub mod store;
pub mod view_mode;

#[cfg(test)]
mod test_support;

pub use config::BoardConfig;
pub use draft::{
  DraftCommand,
  DraftEditor,
  DraftState,
  TaskDraft
};
pub use drag_drop::{
  DragDropCoordinator,
  DragEndEvent,
  DragEventError,
  DragSession,
  DropDecision,
  resolve_drop
};
pub use filter::{
  FilterState,
  group_by_status,
  visible_tasks
};
pub use remote::{
  MemoryRemote,
  RemoteCall,
  RemoteError,
  TaskRemote
};
pub use store::{
  RefreshPolicy,
  StoreError,
  StoreResult,
  TaskChanges,
  TaskStore
};
pub use view_mode::{
  DetailTarget,
  MemoryUrl,
  UrlSurface,
  VIEW_PARAM,
  ViewModeController,
  ViewQuery
};
