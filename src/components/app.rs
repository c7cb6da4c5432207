use super::menu_view::MenuView;
use crate::assets::ProfileAssets;
use wasm_bindgen::JsValue;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    // Asset names are validated once here; a bad name never reaches layout.
    match ProfileAssets::resolve() {
        Ok(assets) => html! { <MenuView assets={assets} /> },
        Err(err) => {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "asset resolution failed: {err}"
            )));
            html! {
                <div style="display:flex; align-items:center; justify-content:center; width:100vw; height:100vh; background:#0e1116;">
                    <div style="background:#161b22; border:2px solid #f85149; border-radius:12px; padding:24px 32px; max-width:480px; color:#f85149;">
                        { format!("Startup failed: {err}") }
                    </div>
                </div>
            }
        }
    }
}
