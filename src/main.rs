mod assets;
mod components;
mod interpolate;
mod state;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
