mod api;
mod components;
mod config;
mod model;
mod state;
mod util;

use components::app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
