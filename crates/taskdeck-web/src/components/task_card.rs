use taskdeck_core::datetime::format_due_display;
use taskdeck_core::task::Task;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

const DESCRIPTION_PREVIEW_LIMIT: usize =
  120;

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub task:      Task,
  pub busy:      bool,
  pub on_toggle: Callback<u64>,
  pub on_edit:   Callback<u64>,
  pub on_delete: Callback<u64>
}

#[function_component(TaskCard)]
pub fn task_card(
  props: &TaskCardProps
) -> Html {
  let task_id = props.task.id;
  let ontoggle = {
    let on_toggle =
      props.on_toggle.clone();
    Callback::from(move |_| {
      on_toggle.emit(task_id);
    })
  };
  let onedit = {
    let on_edit = props.on_edit.clone();
    Callback::from(move |_| {
      on_edit.emit(task_id);
    })
  };
  let ondelete = {
    let on_delete =
      props.on_delete.clone();
    Callback::from(move |_| {
      on_delete.emit(task_id);
    })
  };

  html! {
      <div class="task-card">
          <h3 class={classes!("task-name", props.task.is_completed.then_some("completed"))}>
              { &props.task.task_name }
          </h3>
          <p class="task-description">
              { description_preview(&props.task.task_description) }
          </p>
          <p class="task-due">
              { format_due_display(props.task.due_date) }
          </p>
          <div class="task-actions">
              <button class="btn toggle" onclick={ontoggle} disabled={props.busy}>
                  { if props.task.is_completed { "Mark Pending" } else { "Mark Done" } }
              </button>
              <button class="btn edit" onclick={onedit} disabled={props.busy}>
                  { "Edit" }
              </button>
              <button class="btn delete" onclick={ondelete} disabled={props.busy}>
                  { "Delete" }
              </button>
          </div>
      </div>
  }
}

fn description_preview(
  description: &str
) -> String {
  if description.chars().count()
    <= DESCRIPTION_PREVIEW_LIMIT
  {
    return description.to_string();
  }

  let cut: String = description
    .chars()
    .take(DESCRIPTION_PREVIEW_LIMIT)
    .collect();
  format!("{cut}…")
}

#[cfg(test)]
mod tests {
  use super::{
    DESCRIPTION_PREVIEW_LIMIT,
    description_preview
  };

  #[test]
  fn short_descriptions_pass_through()
  {
    assert_eq!(
      description_preview("water the plants"),
      "water the plants"
    );
    assert_eq!(
      description_preview(""),
      ""
    );
  }

  #[test]
  fn long_descriptions_get_an_ellipsis()
  {
    let long = "x".repeat(
      DESCRIPTION_PREVIEW_LIMIT + 40
    );
    let preview =
      description_preview(&long);

    assert_eq!(
      preview.chars().count(),
      DESCRIPTION_PREVIEW_LIMIT + 1
    );
    assert!(preview.ends_with('…'));
  }

  #[test]
  fn threshold_is_exact() {
    let at_limit = "y".repeat(
      DESCRIPTION_PREVIEW_LIMIT
    );
    assert_eq!(
      description_preview(&at_limit),
      at_limit
    );
  }
}
