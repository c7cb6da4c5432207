use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ContentPanelProps {
    pub on_show_menu: Callback<()>,
}

/// Background screen that gets scaled and dimmed while the menu is open.
#[function_component(ContentPanel)]
pub fn content_panel(props: &ContentPanelProps) -> Html {
    let show_cb = {
        let cb = props.on_show_menu.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:12px; padding:24px;">
            <h2 style="margin:0; font-size:20px;">{"Profiles"}</h2>
            <p style="margin:0; text-align:center; opacity:0.7;">{"Swipe the panel or use the button below."}</p>
            <button onclick={show_cb} style="padding:8px 16px;">{"Show menu"}</button>
        </div>
    }
}
