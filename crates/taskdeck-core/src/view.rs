use crate::task::Task;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
  pub pending:         Vec<Task>,
  pub completed:       Vec<Task>,
  pub total:           usize,
  pub completed_count: usize,
  pub completion_rate: u8
}

impl DashboardView {
  #[must_use]
  pub fn project(
    tasks: &[Task]
  ) -> Self {
    let (completed, pending): (
      Vec<Task>,
      Vec<Task>
    ) = tasks
      .iter()
      .cloned()
      .partition(|task| {
        task.is_completed
      });

    let total = tasks.len();
    let completed_count =
      completed.len();

    Self {
      pending,
      completed,
      total,
      completed_count,
      completion_rate:
        completion_rate(
          completed_count,
          total
        )
    }
  }
}

#[must_use]
pub fn completion_rate(
  completed: usize,
  total: usize
) -> u8 {
  if total == 0 {
    // An empty collection reads as 0%, never NaN.
    return 0;
  }

  let rate = (completed as f64
    / total as f64
    * 100.0)
    .round();
  rate as u8
}
