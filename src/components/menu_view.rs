use super::{content_panel::ContentPanel, profile_card::ProfileCard};
use crate::assets::ProfileAssets;
use crate::state::{MenuAction, MenuState, menu};
use crate::util::{clog, measure_viewport};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, PointerEvent};
use yew::prelude::*;

// One in-flight gesture at a time; later pointers are ignored.
struct GestureOrigin {
    pointer_id: i32,
    start_x: f64,
    start_y: f64,
}

#[derive(Properties, PartialEq, Clone)]
pub struct MenuViewProps {
    pub assets: ProfileAssets,
}

/// The menu screen: owns the interaction state and renders the two stacked
/// panels, translating pointer events into state-machine actions.
#[function_component(MenuView)]
pub fn menu_view(props: &MenuViewProps) -> Html {
    let state = use_reducer(MenuState::default);
    let viewport = use_state(measure_viewport);
    let origin = use_mut_ref(|| None::<GestureOrigin>);
    // Set when a pointer-up ends a drag, so the click it synthesizes is not
    // also treated as an overlay tap.
    let drag_consumed = use_mut_ref(|| false);

    // Re-measure on resize so panel geometry and interpolation ranges track
    // the live viewport.
    {
        let viewport = viewport.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let resize_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                viewport.set(measure_viewport());
            }) as Box<dyn FnMut(_)>);
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();
            move || {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    resize_cb.as_ref().unchecked_ref(),
                );
            }
        });
    }

    let vp = *viewport;
    let visual = state.visual(vp.width);

    let on_toggle = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(MenuAction::Toggle))
    };

    // Drags are only recognized while the menu is open.
    let on_pointer_down = {
        let state = state.clone();
        let origin = origin.clone();
        let drag_consumed = drag_consumed.clone();
        Callback::from(move |e: PointerEvent| {
            *drag_consumed.borrow_mut() = false;
            if !state.open || origin.borrow().is_some() {
                return;
            }
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                let _ = target.set_pointer_capture(e.pointer_id());
            }
            *origin.borrow_mut() = Some(GestureOrigin {
                pointer_id: e.pointer_id(),
                start_x: e.client_x() as f64,
                start_y: e.client_y() as f64,
            });
        })
    };

    let on_pointer_move = {
        let state = state.clone();
        let origin = origin.clone();
        Callback::from(move |e: PointerEvent| {
            let (dx, dy) = {
                let borrowed = origin.borrow();
                let Some(o) = borrowed.as_ref() else { return };
                if o.pointer_id != e.pointer_id() {
                    return;
                }
                (
                    e.client_x() as f64 - o.start_x,
                    e.client_y() as f64 - o.start_y,
                )
            };
            if !state.dragging && dx.hypot(dy) < menu::MIN_DRAG_PX {
                return;
            }
            if state.axis.is_none() {
                clog(&format!(
                    "axis sample |dx|={:.1} |dy|={:.1}",
                    dx.abs(),
                    dy.abs()
                ));
            }
            state.dispatch(MenuAction::DragMoved { dx, dy });
        })
    };

    // Shared by pointerup and pointercancel: an abandoned gesture releases
    // at its current offset.
    let on_pointer_up = {
        let state = state.clone();
        let origin = origin.clone();
        let drag_consumed = drag_consumed.clone();
        Callback::from(move |e: PointerEvent| {
            let Some(o) = origin
                .borrow_mut()
                .take_if(|o| o.pointer_id == e.pointer_id())
            else {
                return;
            };
            if !state.dragging {
                return;
            }
            *drag_consumed.borrow_mut() = true;
            let dx = e.client_x() as f64 - o.start_x;
            if dx < 0.0 && dx.abs() > menu::close_threshold(vp.width) {
                clog(&format!("drag release dx={dx:.1}: closing menu"));
            }
            state.dispatch(MenuAction::DragEnded {
                dx,
                viewport_width: vp.width,
            });
        })
    };

    let on_overlay_click = {
        let state = state.clone();
        let drag_consumed = drag_consumed.clone();
        Callback::from(move |_| {
            if std::mem::take(&mut *drag_consumed.borrow_mut()) {
                return;
            }
            state.dispatch(MenuAction::Dismiss);
        })
    };

    // Immediate updates while tracking a drag, eased settle otherwise.
    let transition = if state.dragging {
        "none"
    } else {
        "transform 0.25s ease, opacity 0.25s ease"
    };

    let root_style = format!(
        "position:relative; width:100vw; height:100vh; background:#000000; overflow:hidden; touch-action:{};",
        if state.open { "none" } else { "auto" }
    );
    let content_style = format!(
        "position:absolute; inset:0; z-index:0; background:#ffffff; padding-top:44px; box-sizing:border-box; transform:scale({}); opacity:{}; transition:{};",
        visual.scale, visual.opacity, transition
    );
    let panel_style = format!(
        "position:absolute; top:0; bottom:0; left:0; z-index:2; width:{}px; background:#ffffff; padding-top:44px; box-sizing:border-box; box-shadow:0 0 10px rgba(0,0,0,0.5); transform:translateX({}px); transition:{};",
        vp.panel_width(),
        visual.offset_x,
        transition
    );

    html! {
        <div
            style={root_style}
            onpointerdown={on_pointer_down}
            onpointermove={on_pointer_move}
            onpointerup={on_pointer_up.clone()}
            onpointercancel={on_pointer_up}
        >
            <div style={content_style}>
                <ContentPanel on_show_menu={on_toggle.clone()} />
            </div>
            { if state.open {
                html! { <div
                    style="position:absolute; inset:0; z-index:1; cursor:pointer;"
                    onclick={on_overlay_click}
                /> }
            } else {
                html! {}
            } }
            <div style={panel_style}>
                <ProfileCard assets={props.assets.clone()} on_toggle={on_toggle} />
            </div>
        </div>
    }
}
