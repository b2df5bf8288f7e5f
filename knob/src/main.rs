mod app;
mod scene;
mod settings;
mod widgets;

use env_logger::Env;
use iced::Size;

use crate::app::{App, WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(Size {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        })
        .subscription(App::subscription)
        .run()
}
