mod api;
mod app;
mod context;
mod dom;
mod notify;
mod pages;
mod state;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<app::App>::new().render();
}
