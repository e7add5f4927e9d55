use std::cell::{
  Cell,
  RefCell
};
use std::collections::BTreeMap;
use std::rc::Rc;

use serde::{
  Deserialize,
  Serialize
};
use taskboard_shared::{
  TaskId,
  ViewMode
};
use tracing::{
  debug,
  info,
  warn
};

pub const VIEW_PARAM: &str = "view";

/// Key-value view of the current URL's
/// query string.
pub trait UrlSurface {
  fn query_param(
    &self,
    key: &str
  ) -> Option<String>;

  /// Must not create a history entry.
  fn replace_query_param(
    &self,
    key: &str,
    value: &str
  );
}

/// In-memory URL surface. Clones share
/// the same query string.
#[derive(Debug, Clone, Default)]
pub struct MemoryUrl {
  params:          Rc<RefCell<BTreeMap<String, String>>>,
  history_entries: Rc<Cell<usize>>,
  replacements:    Rc<Cell<usize>>
}

impl MemoryUrl {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_param(
    key: &str,
    value: &str
  ) -> Self {
    let url = Self::default();
    url.params.borrow_mut().insert(
      key.to_string(),
      value.to_string()
    );
    url
  }

  /// Simulates a navigation that pushes a
  /// new history entry.
  #[cfg(test)]
  pub fn push_query_param(
    &self,
    key: &str,
    value: &str
  ) {
    self.params.borrow_mut().insert(
      key.to_string(),
      value.to_string()
    );
    self
      .history_entries
      .set(self.history_entries.get() + 1);
  }

  pub fn history_entries(&self) -> usize {
    self.history_entries.get()
  }

  pub fn replacements(&self) -> usize {
    self.replacements.get()
  }
}

impl UrlSurface for MemoryUrl {
  fn query_param(
    &self,
    key: &str
  ) -> Option<String> {
    self.params.borrow().get(key).cloned()
  }

  fn replace_query_param(
    &self,
    key: &str,
    value: &str
  ) {
    self.params.borrow_mut().insert(
      key.to_string(),
      value.to_string()
    );
    self
      .replacements
      .set(self.replacements.get() + 1);
  }
}

/// Query carried by the list route and
/// by the per-task detail route.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct ViewQuery {
  #[serde(default)]
  pub view: ViewMode
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct DetailTarget {
  pub id:    TaskId,
  pub query: ViewQuery
}

pub struct ViewModeController<U> {
  mode:    ViewMode,
  surface: U
}

impl<U: UrlSurface> ViewModeController<U> {
  /// Reads `view` once. Absent or
  /// unrecognised values resolve to the
  /// table and are normalised in place.
  pub fn mount(surface: U) -> Self {
    let raw =
      surface.query_param(VIEW_PARAM);
    let mode = match raw.as_deref() {
      | Some(value) => {
        ViewMode::from_param(value)
          .unwrap_or_else(|| {
            warn!(
              value,
              "unrecognised view mode in \
               url; using table"
            );
            ViewMode::Table
          })
      }
      | None => ViewMode::Table
    };

    if raw.as_deref()
      != Some(mode.as_param())
    {
      surface.replace_query_param(
        VIEW_PARAM,
        mode.as_param()
      );
    }

    info!(
      mode = mode.as_param(),
      "mounted view mode"
    );
    Self {
      mode,
      surface
    }
  }

  pub fn mode(&self) -> ViewMode {
    self.mode
  }

  pub fn surface(&self) -> &U {
    &self.surface
  }

  /// Returns whether the mode changed.
  pub fn set(
    &mut self,
    mode: ViewMode
  ) -> bool {
    if mode == self.mode {
      return false;
    }
    self.mode = mode;
    self.surface.replace_query_param(
      VIEW_PARAM,
      mode.as_param()
    );
    debug!(
      mode = mode.as_param(),
      "view mode changed"
    );
    true
  }

  pub fn toggle(&mut self) -> ViewMode {
    self.set(self.mode.toggled());
    self.mode
  }

  pub fn detail_target(
    &self,
    id: TaskId
  ) -> DetailTarget {
    DetailTarget {
      id,
      query: ViewQuery {
        view: self.mode
      }
    }
  }
}
