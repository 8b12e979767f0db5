use leptos::mount::mount_to;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod app;
pub mod components;
pub mod models;
pub mod pages;
pub mod services;
pub mod utils;

pub use app::App;

/// Id of the element the app mounts into. The hosting page must contain it
/// before the module starts; a missing node is a startup failure.
const MOUNT_ID: &str = "root";

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let mount_node = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
        .expect("mount node #root not found in hosting page");

    mount_to(mount_node, App).forget();
}
