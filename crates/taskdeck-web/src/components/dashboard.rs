use taskdeck_core::task::{
  Task,
  TaskList
};
use taskdeck_core::view::DashboardView;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_effect_with,
  use_state
};

use super::{
  Modal,
  TaskCard,
  TaskForm,
  TaskFormSubmit
};
use crate::api;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
  pub username:  String,
  pub on_logout: Callback<()>
}

#[function_component(Dashboard)]
pub fn dashboard(
  props: &DashboardProps
) -> Html {
  let tasks =
    use_state(TaskList::new);
  let loading = use_state(|| false);
  let busy = use_state(|| false);
  let show_modal = use_state(|| false);
  let current_task =
    use_state(|| None::<Task>);
  let form_error =
    use_state(|| None::<String>);
  let show_pending =
    use_state(|| true);
  let show_completed =
    use_state(|| true);

  {
    // One fetch per dashboard mount; mutations never re-trigger it.
    let tasks = tasks.clone();
    let loading = loading.clone();
    use_effect_with((), move |_| {
      loading.set(true);
      wasm_bindgen_futures::spawn_local(async move {
        match api::tasks::list().await {
          Ok(fetched) => {
            let mut next = TaskList::new();
            next.replace_all(fetched);
            tasks.set(next);
          }
          Err(err) => tracing::error!(error = %err, "could not fetch tasks"),
        }
        loading.set(false);
      });

      || ()
    });
  }

  let on_toggle = {
    let tasks = tasks.clone();
    let busy = busy.clone();
    Callback::from(move |id: u64| {
      if *busy {
        return;
      }
      let Some(staged) =
        tasks.toggled(id)
      else {
        return;
      };
      busy.set(true);

      let tasks = tasks.clone();
      let busy = busy.clone();
      wasm_bindgen_futures::spawn_local(async move {
        match api::tasks::update(&staged).await {
          Ok(confirmed) => {
            let mut next = (*tasks).clone();
            next.apply_updated(confirmed);
            tasks.set(next);
          }
          Err(err) => tracing::error!(error = %err, id, "could not toggle task"),
        }
        busy.set(false);
      });
    })
  };

  let on_delete = {
    let tasks = tasks.clone();
    let busy = busy.clone();
    Callback::from(move |id: u64| {
      if *busy {
        return;
      }

      let confirmed = web_sys::window()
        .and_then(|window| {
          window
            .confirm_with_message(
              "Are you sure you want \
               to delete this task?"
            )
            .ok()
        })
        .unwrap_or(false);
      if !confirmed {
        return;
      }
      busy.set(true);

      let tasks = tasks.clone();
      let busy = busy.clone();
      wasm_bindgen_futures::spawn_local(async move {
        match api::tasks::remove(id).await {
          Ok(()) => {
            let mut next = (*tasks).clone();
            next.apply_removed(id);
            tasks.set(next);
          }
          Err(err) => tracing::error!(error = %err, id, "could not delete task"),
        }
        busy.set(false);
      });
    })
  };

  let on_edit = {
    let tasks = tasks.clone();
    let show_modal = show_modal.clone();
    let current_task =
      current_task.clone();
    let form_error = form_error.clone();
    Callback::from(move |id: u64| {
      let Some(task) = tasks.get(id)
      else {
        return;
      };
      current_task
        .set(Some(task.clone()));
      form_error.set(None);
      show_modal.set(true);
    })
  };

  let on_add_click = {
    let show_modal = show_modal.clone();
    let current_task =
      current_task.clone();
    let form_error = form_error.clone();
    Callback::from(move |_| {
      current_task.set(None);
      form_error.set(None);
      show_modal.set(true);
    })
  };

  let on_form_cancel = {
    let show_modal = show_modal.clone();
    let current_task =
      current_task.clone();
    let form_error = form_error.clone();
    Callback::from(move |_| {
      show_modal.set(false);
      current_task.set(None);
      form_error.set(None);
    })
  };

  let on_form_save = {
    let tasks = tasks.clone();
    let busy = busy.clone();
    let show_modal = show_modal.clone();
    let current_task =
      current_task.clone();
    let form_error = form_error.clone();
    Callback::from(
      move |submit: TaskFormSubmit| {
        if *busy {
          return;
        }
        busy.set(true);

        let tasks = tasks.clone();
        let busy = busy.clone();
        let show_modal =
          show_modal.clone();
        let current_task =
          current_task.clone();
        let form_error =
          form_error.clone();
        wasm_bindgen_futures::spawn_local(async move {
          let outcome = match submit {
            TaskFormSubmit::Create(draft) => {
              api::tasks::create(&draft).await.map(|confirmed| {
                let mut next = (*tasks).clone();
                next.apply_created(confirmed);
                next
              })
            }
            TaskFormSubmit::Update(task) => {
              api::tasks::update(&task).await.map(|confirmed| {
                let mut next = (*tasks).clone();
                next.apply_updated(confirmed);
                next
              })
            }
          };

          match outcome {
            Ok(next) => {
              tasks.set(next);
              form_error.set(None);
              show_modal.set(false);
              current_task.set(None);
            }
            Err(err) => {
              tracing::error!(error = %err, "could not save task");
              form_error.set(Some(err.to_string()));
            }
          }
          busy.set(false);
        });
      }
    )
  };

  let on_logout_click = {
    let on_logout =
      props.on_logout.clone();
    Callback::from(move |_| {
      on_logout.emit(());
    })
  };

  let on_toggle_pending = {
    let show_pending =
      show_pending.clone();
    Callback::from(move |_| {
      show_pending
        .set(!*show_pending);
    })
  };

  let on_toggle_completed = {
    let show_completed =
      show_completed.clone();
    Callback::from(move |_| {
      show_completed
        .set(!*show_completed);
    })
  };

  let view = DashboardView::project(
    tasks.tasks()
  );

  let render_card = |task: &Task| {
    html! {
        <TaskCard
            task={task.clone()}
            busy={*busy}
            on_toggle={on_toggle.clone()}
            on_edit={on_edit.clone()}
            on_delete={on_delete.clone()}
        />
    }
  };

  html! {
      <div class="dashboard">
          <nav class="topbar">
              <span class="title">{ "Task Manager" }</span>
              <button class="btn" onclick={on_logout_click}>{ "Sign Out" }</button>
          </nav>

          <h1 class="greeting">{ format!("Hello, {}", props.username) }</h1>
          <button class="btn primary" onclick={on_add_click}>{ "Add Task" }</button>

          {
              if *show_modal {
                  html! {
                      <Modal>
                          <TaskForm
                              editing={(*current_task).clone()}
                              busy={*busy}
                              error={(*form_error).clone()}
                              on_save={on_form_save.clone()}
                              on_cancel={on_form_cancel.clone()}
                          />
                      </Modal>
                  }
              } else {
                  html! {}
              }
          }

          {
              if *loading {
                  html! { <div class="loading">{ "Loading tasks..." }</div> }
              } else {
                  html! {}
              }
          }

          <div class="progress-summary">
              { format!("Tasks completed: {}/{}", view.completed_count, view.total) }
          </div>
          <div class="progress-track">
              <div
                  class="progress-fill"
                  style={format!("width: {}%", view.completion_rate)}
              ></div>
          </div>

          <div class="section">
              <div class="section-header">
                  <h2>{ "Pending Tasks" }</h2>
                  <button class="btn" onclick={on_toggle_pending}>
                      { if *show_pending { "Collapse" } else { "Expand" } }
                  </button>
              </div>
              {
                  if *show_pending {
                      html! {
                          <div class="card-grid">
                              { for view.pending.iter().map(&render_card) }
                          </div>
                      }
                  } else {
                      html! {}
                  }
              }
          </div>

          <div class="section">
              <div class="section-header">
                  <h2>{ "Completed Tasks" }</h2>
                  <button class="btn" onclick={on_toggle_completed}>
                      { if *show_completed { "Collapse" } else { "Expand" } }
                  </button>
              </div>
              {
                  if *show_completed {
                      html! {
                          <div class="card-grid">
                              { for view.completed.iter().map(&render_card) }
                          </div>
                      }
                  } else {
                      html! {}
                  }
              }
          </div>
      </div>
  }
}
