use chrono::{
  DateTime,
  Duration,
  Utc
};
use taskboard_shared::{
  TaskDto,
  TaskId,
  TaskStatus
};

pub(crate) fn task(
  id: TaskId,
  name: &str,
  status: TaskStatus
) -> TaskDto {
  task_with_details(id, name, "", status)
}

pub(crate) fn task_with_details(
  id: TaskId,
  name: &str,
  details: &str,
  status: TaskStatus
) -> TaskDto {
  TaskDto {
    id,
    name: name.to_string(),
    details: details.to_string(),
    status,
    updated_at: DateTime::<Utc>::UNIX_EPOCH
      - Duration::days(1)
  }
}
