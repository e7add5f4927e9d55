mod board_card;
mod board_column;
mod draft_row;
mod filter_bar;
mod status_select;
mod task_board;
mod task_table;
mod task_table_row;
mod view_switch;

pub use board_card::BoardCard;
pub use board_column::BoardColumn;
pub use draft_row::DraftRow;
pub use filter_bar::FilterBar;
pub use status_select::StatusSelect;
pub use task_board::TaskBoard;
pub use task_table::TaskTable;
pub use task_table_row::TaskTableRow;
pub use view_switch::ViewSwitch;

/// Drag payload key for the card's status at
/// drag start.
pub(crate) const DRAG_SOURCE_FORMAT: &str =
  "application/x-taskboard-status";
