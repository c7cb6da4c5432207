use super::avatar::Avatar;
use crate::assets::ProfileAssets;
use yew::prelude::*;

const BIO: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, \
sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.";

#[derive(Properties, PartialEq, Clone)]
pub struct ProfileCardProps {
    pub assets: ProfileAssets,
    pub on_toggle: Callback<()>,
}

/// Static profile content shown on the sliding panel: banner, overlapping
/// circular avatar, title, bio paragraph, and the hide-menu button.
#[function_component(ProfileCard)]
pub fn profile_card(props: &ProfileCardProps) -> Html {
    let hide_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div style="display:flex; flex-direction:column; height:100%; overflow:hidden;">
            <img
                src={props.assets.banner_url}
                alt="profile background"
                style="width:100%; height:160px; object-fit:cover; display:block;"
            />
            <div style="display:flex; justify-content:center; margin-top:-65px; margin-bottom:2px;">
                <Avatar src={props.assets.avatar_url} alt="avatar" />
            </div>
            <div style="display:flex; flex-direction:column; align-items:center; gap:8px; padding:16px;">
                <h2 style="margin:0; font-size:22px;">{"Alex Morgan"}</h2>
                <p style="margin:0; padding:0 12px; text-align:center; line-height:1.4;">{ BIO }</p>
                <button onclick={hide_cb} style="padding:8px 16px;">{"Hide menu"}</button>
            </div>
        </div>
    }
}
