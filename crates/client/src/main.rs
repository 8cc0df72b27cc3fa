mod animation;
mod components;
mod shell;

fn main() {
    tracing_wasm::set_as_global_default();
    yew::start_app::<components::app::App>();
}
