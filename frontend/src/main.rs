use crate::app::App;

mod app;
mod components;
mod logger;
mod page_frame;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logger::init(level);
    yew::Renderer::<App>::new().render();
}
