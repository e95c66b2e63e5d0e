use taskdeck_core::session::Session;
use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::api;
use crate::components::{
  Dashboard,
  Login,
  Register
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
  Login,
  Register
}

#[function_component(App)]
pub fn app() -> Html {
  let session =
    use_state(Session::logged_out);
  let screen =
    use_state(|| Screen::Login);
  let auth_busy = use_state(|| false);

  {
    let session = session.clone();
    use_effect_with((), move |_| {
      // One registration per process lifetime, not per render.
      api::register_unauthorized_hook({
        let session = session.clone();
        Callback::from(move |_| {
          tracing::warn!(
            "credential refresh failed, clearing session"
          );
          session
            .set(Session::logged_out());
        })
      });

      let session = session.clone();
      wasm_bindgen_futures::spawn_local(async move {
        match api::auth::probe().await {
          Ok(identity) => session.set(Session::confirmed(identity)),
          Err(err) => {
            tracing::info!(error = %err, "startup probe found no session");
            session.set(Session::failed(err.to_string()));
          }
        }
      });

      || ()
    });
  }

  let on_login = {
    let session = session.clone();
    let auth_busy = auth_busy.clone();
    Callback::from(
      move |(username, password): (
        String,
        String
      )| {
        if *auth_busy {
          return;
        }
        auth_busy.set(true);

        let session = session.clone();
        let auth_busy =
          auth_busy.clone();
        wasm_bindgen_futures::spawn_local(async move {
          match api::auth::login(&username, &password).await {
            Ok(identity) => session.set(Session::confirmed(identity)),
            Err(err) => {
              tracing::error!(error = %err, "login failed");
              session.set(Session::failed(err.to_string()));
            }
          }
          auth_busy.set(false);
        });
      }
    )
  };

  let on_register = {
    let session = session.clone();
    let auth_busy = auth_busy.clone();
    Callback::from(
      move |(username, password): (
        String,
        String
      )| {
        if *auth_busy {
          return;
        }
        auth_busy.set(true);

        let session = session.clone();
        let auth_busy =
          auth_busy.clone();
        wasm_bindgen_futures::spawn_local(async move {
          match api::auth::register(&username, &password).await {
            Ok(identity) => session.set(Session::confirmed(identity)),
            Err(err) => {
              tracing::error!(error = %err, "registration failed");
              session.set(Session::failed(err.to_string()));
            }
          }
          auth_busy.set(false);
        });
      }
    )
  };

  let on_logout = {
    let session = session.clone();
    Callback::from(move |_: ()| {
      let session = session.clone();
      wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = api::auth::logout().await {
          tracing::error!(error = %err, "logout request failed");
        }
        // Local identity clears no matter what the server said.
        session.set(Session::logged_out());
      });
    })
  };

  let on_show_register = {
    let screen = screen.clone();
    Callback::from(
      move |_: MouseEvent| {
        screen.set(Screen::Register);
      }
    )
  };

  let on_show_login = {
    let screen = screen.clone();
    Callback::from(
      move |_: MouseEvent| {
        screen.set(Screen::Login);
      }
    )
  };

  if session.is_logged_in {
    let username = session
      .username
      .clone()
      .unwrap_or_default();
    return html! {
      <Dashboard
        username={username}
        on_logout={on_logout}
      />
    };
  }

  match *screen {
    | Screen::Login => html! {
      <Login
        busy={*auth_busy}
        error={session.last_error.clone()}
        on_submit={on_login}
        on_show_register={on_show_register}
      />
    },
    | Screen::Register => html! {
      <Register
        busy={*auth_busy}
        error={session.last_error.clone()}
        on_submit={on_register}
        on_show_login={on_show_login}
      />
    }
  }
}
