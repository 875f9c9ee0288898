mod app;
mod components;

const MOUNT_ID: &str = "app";

fn main() {
  console_error_panic_hook::set_once();
  wasm_tracing::set_as_global_default();

  match mount_point() {
    | Some(root) => {
      tracing::info!(
        mount = MOUNT_ID,
        "mounting tasklet"
      );
      yew::Renderer::<app::App>::with_root(
        root
      )
      .render();
    }
    | None => {
      tracing::error!(
        mount = MOUNT_ID,
        "no mount element; nothing \
         rendered"
      );
    }
  }
}

fn mount_point() -> Option<web_sys::Element>
{
  gloo::utils::document()
    .get_element_by_id(MOUNT_ID)
}
