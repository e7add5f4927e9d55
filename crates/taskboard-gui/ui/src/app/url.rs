use std::cell::RefCell;
use std::collections::BTreeMap;

use taskboard_core::UrlSurface;
use yew_router::prelude::{
  Location,
  Navigator
};

use super::Route;

/// URL surface over yew-router. Writes go
/// through `Navigator::replace_with_query`
/// so no history entry is created.
pub(super) struct RouterUrl {
  navigator: Option<Navigator>,
  route:     Route,
  params:    RefCell<BTreeMap<String, String>>
}

impl RouterUrl {
  pub(super) fn new(
    navigator: Option<Navigator>,
    location: Option<&Location>,
    route: Route
  ) -> Self {
    let params = location
      .and_then(|location| {
        location
          .query::<BTreeMap<String, String>>()
          .map_err(|error| {
            tracing::warn!(
              ?error,
              "failed to decode url query"
            );
          })
          .ok()
      })
      .unwrap_or_default();

    if navigator.is_none() {
      tracing::warn!(
        "no router navigator; view mode \
         will not be mirrored to the url"
      );
    }

    Self {
      navigator,
      route,
      params: RefCell::new(params)
    }
  }
}

impl UrlSurface for RouterUrl {
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
    let mut params =
      self.params.borrow_mut();
    params.insert(
      key.to_string(),
      value.to_string()
    );

    let Some(navigator) = &self.navigator
    else {
      return;
    };
    if let Err(error) = navigator
      .replace_with_query(
        &self.route,
        &*params
      )
    {
      tracing::warn!(
        ?error,
        key,
        value,
        "failed to replace url query"
      );
    }
  }
}
