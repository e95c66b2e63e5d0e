use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
  pub children: Html
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
  html! {
      <div class="modal-backdrop">
          <div class="modal">
              { props.children.clone() }
          </div>
      </div>
  }
}
