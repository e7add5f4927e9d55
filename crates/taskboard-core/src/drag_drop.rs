use taskboard_shared::{
  StatusParseError,
  TaskDto,
  TaskId,
  TaskStatus
};
use thiserror::Error;
use tracing::{
  debug,
  info
};

use crate::remote::TaskRemote;
use crate::store::{
  StoreError,
  StoreResult,
  TaskStore
};

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum DragEventError {
  #[error("invalid dragged task id: {0:?}")]
  InvalidTaskId(String),
  #[error("invalid source group: {0}")]
  InvalidSource(StatusParseError),
  #[error(
    "invalid destination group: {0}"
  )]
  InvalidDestination(StatusParseError)
}

/// A card released over the board.
/// `destination` is `None` when the card
/// was dropped outside every column.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct DragEndEvent {
  pub dragged:     TaskId,
  pub source:      TaskStatus,
  pub destination: Option<TaskStatus>
}

impl DragEndEvent {
  /// Validates the raw strings carried by
  /// a DOM drag payload.
  pub fn parse(
    dragged: &str,
    source: &str,
    destination: Option<&str>
  ) -> Result<Self, DragEventError> {
    let dragged = dragged
      .trim()
      .parse::<TaskId>()
      .map_err(|_| {
        DragEventError::InvalidTaskId(
          dragged.to_string()
        )
      })?;
    let source = source
      .parse::<TaskStatus>()
      .map_err(
        DragEventError::InvalidSource
      )?;
    let destination = destination
      .map(str::parse::<TaskStatus>)
      .transpose()
      .map_err(
        DragEventError::InvalidDestination
      )?;
    Ok(Self {
      dragged,
      source,
      destination
    })
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum DropDecision {
  Cancelled,
  SameGroup,
  NotVisible(TaskId),
  Move {
    id: TaskId,
    to: TaskStatus
  }
}

/// Drop policy. Only tasks in the
/// visible subset can be moved.
pub fn resolve_drop(
  event: &DragEndEvent,
  visible: &[TaskDto]
) -> DropDecision {
  let Some(destination) =
    event.destination
  else {
    return DropDecision::Cancelled;
  };
  if destination == event.source {
    return DropDecision::SameGroup;
  }
  if visible
    .iter()
    .any(|task| task.id == event.dragged)
  {
    DropDecision::Move {
      id: event.dragged,
      to: destination
    }
  } else {
    DropDecision::NotVisible(
      event.dragged
    )
  }
}

pub struct DragDropCoordinator;

impl DragDropCoordinator {
  /// Applies one drag-end to completion,
  /// including the reload after a move.
  /// A task that vanished from the store
  /// since render is treated as not
  /// visible.
  #[tracing::instrument(
    skip(store, visible),
    fields(visible = visible.len())
  )]
  pub async fn handle_drag_end<
    R: TaskRemote
  >(
    store: &TaskStore<R>,
    event: DragEndEvent,
    visible: &[TaskDto]
  ) -> StoreResult<DropDecision> {
    let decision =
      resolve_drop(&event, visible);
    match decision {
      | DropDecision::Move {
        id,
        to
      } => {
        info!(
          id,
          from = %event.source,
          to = %to,
          "moving task between status \
           groups"
        );
        match store.set_status(id, to).await {
          | Ok(_) => {}
          | Err(StoreError::UnknownTask(
            id
          )) => {
            debug!(
              id,
              "drag ignored because task \
               left the store since render"
            );
            return Ok(
              DropDecision::NotVisible(id)
            );
          }
          | Err(err) => return Err(err)
        }
      }
      | DropDecision::NotVisible(id) => {
        debug!(
          id,
          "drag ignored because task is \
           not in the visible subset"
        );
      }
      | DropDecision::Cancelled
      | DropDecision::SameGroup => {
        debug!(
          ?decision,
          "drag produced no move"
        );
      }
    }
    Ok(decision)
  }
}

/// Transient hint state for rendering an
/// in-progress drag.
#[derive(
  Debug, Clone, Default, PartialEq, Eq,
)]
pub struct DragSession {
  dragging: Option<(TaskId, TaskStatus)>,
  over:     Option<TaskStatus>
}

impl DragSession {
  pub fn begin(
    &mut self,
    id: TaskId,
    source: TaskStatus
  ) {
    self.dragging = Some((id, source));
    self.over = None;
  }

  /// Returns whether the hovered column
  /// changed.
  pub fn hover(
    &mut self,
    column: TaskStatus
  ) -> bool {
    if self.over == Some(column) {
      return false;
    }
    self.over = Some(column);
    true
  }

  pub fn dragging(
    &self
  ) -> Option<TaskId> {
    self.dragging.map(|(id, _)| id)
  }

  pub fn source(
    &self
  ) -> Option<TaskStatus> {
    self
      .dragging
      .map(|(_, source)| source)
  }

  pub fn is_over(
    &self,
    column: TaskStatus
  ) -> bool {
    self.over == Some(column)
  }

  pub fn clear(&mut self) {
    *self = Self::default();
  }
}
