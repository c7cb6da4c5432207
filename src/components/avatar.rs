use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AvatarProps {
    pub src: &'static str,
    pub alt: &'static str,
}

/// Fixed-diameter circular portrait with a white ring.
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    html! {
        <img
            src={props.src}
            alt={props.alt}
            style="width:125px; height:125px; border-radius:50%; object-fit:cover; border:4px solid #ffffff; display:block; box-sizing:border-box;"
        />
    }
}
