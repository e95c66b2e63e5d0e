use taskdeck_core::datetime::{
  join_due,
  split_due
};
use taskdeck_core::task::{
  Task,
  TaskDraft
};
use web_sys::{
  HtmlInputElement,
  HtmlTextAreaElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Clone, PartialEq)]
pub enum TaskFormSubmit {
  Create(TaskDraft),
  Update(Task)
}

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub editing:   Option<Task>,
  pub busy:      bool,
  pub error:     Option<String>,
  pub on_save:   Callback<TaskFormSubmit>,
  pub on_cancel: Callback<MouseEvent>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let (
    initial_name,
    initial_description,
    initial_date,
    initial_time
  ) = match &props.editing {
    | Some(task) => {
      let (date, time) =
        split_due(task.due_date);
      (
        task.task_name.clone(),
        task.task_description.clone(),
        date,
        time
      )
    }
    | None => (
      String::new(),
      String::new(),
      String::new(),
      String::new()
    )
  };

  let task_name =
    use_state(move || initial_name);
  let task_description = use_state(
    move || initial_description
  );
  let due_date =
    use_state(move || initial_date);
  let due_time =
    use_state(move || initial_time);
  let form_error =
    use_state(|| None::<String>);

  let on_name_input = {
    let task_name = task_name.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        task_name.set(input.value());
      }
    )
  };

  let on_description_input = {
    let task_description =
      task_description.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlTextAreaElement =
          e.target_unchecked_into();
        task_description
          .set(input.value());
      }
    )
  };

  let on_date_input = {
    let due_date = due_date.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        due_date.set(input.value());
      }
    )
  };

  let on_time_input = {
    let due_time = due_time.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        due_time.set(input.value());
      }
    )
  };

  let onsubmit = {
    let task_name = task_name.clone();
    let task_description =
      task_description.clone();
    let due_date = due_date.clone();
    let due_time = due_time.clone();
    let form_error = form_error.clone();
    let editing = props.editing.clone();
    let on_save = props.on_save.clone();
    Callback::from(move |event: SubmitEvent| {
      event.prevent_default();

      let name = task_name.trim().to_string();
      if name.is_empty() {
        form_error.set(Some("a task name is required".to_string()));
        return;
      }

      let Some(due) = join_due(&due_date, &due_time) else {
        form_error.set(Some("enter a valid due date and time".to_string()));
        return;
      };

      form_error.set(None);
      let submit = match editing.clone() {
        Some(mut task) => {
          task.task_name = name;
          task.task_description = (*task_description).clone();
          task.due_date = due;
          TaskFormSubmit::Update(task)
        }
        None => TaskFormSubmit::Create(TaskDraft::new(
          name,
          (*task_description).clone(),
          due,
        )),
      };
      on_save.emit(submit);
    })
  };

  let is_editing =
    props.editing.is_some();
  let error_line = form_error
    .as_ref()
    .cloned()
    .or_else(|| props.error.clone());

  html! {
      <form class="task-form" {onsubmit}>
          <h2>{ if is_editing { "Edit Task" } else { "Add Task" } }</h2>
          {
              if let Some(error) = error_line {
                  html! { <div class="form-error">{ error }</div> }
              } else {
                  html! {}
              }
          }
          <div class="field">
              <label for="task-name">{ "Task Name" }</label>
              <input
                  id="task-name"
                  type="text"
                  required={true}
                  placeholder="Enter task name"
                  value={(*task_name).clone()}
                  oninput={on_name_input}
              />
          </div>
          <div class="field">
              <label for="task-description">{ "Task Description" }</label>
              <textarea
                  id="task-description"
                  rows="4"
                  placeholder="Enter task description"
                  value={(*task_description).clone()}
                  oninput={on_description_input}
              />
          </div>
          <div class="field">
              <label for="due-date">{ "Due Date" }</label>
              <input
                  id="due-date"
                  type="date"
                  required={true}
                  value={(*due_date).clone()}
                  oninput={on_date_input}
              />
          </div>
          <div class="field">
              <label for="due-time">{ "Due Time" }</label>
              <input
                  id="due-time"
                  type="time"
                  required={true}
                  value={(*due_time).clone()}
                  oninput={on_time_input}
              />
          </div>
          <div class="footer">
              <button
                  type="button"
                  class="btn"
                  onclick={props.on_cancel.clone()}
              >
                  { "Cancel" }
              </button>
              <button
                  type="submit"
                  class="btn primary"
                  disabled={props.busy}
              >
                  {
                      if props.busy {
                          "Saving..."
                      } else if is_editing {
                          "Update Task"
                      } else {
                          "Add Task"
                      }
                  }
              </button>
          </div>
      </form>
  }
}
