//! Thesis defense paperwork generator - desktop entry point.

use iced::Size;
use iced::window;
use tracing_subscriber::EnvFilter;

use sidang_gui::App;

pub fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Starting Berita Acara Ujian Skripsi");

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1040.0, 900.0),
            min_size: Some(Size::new(760.0, 600.0)),
            ..Default::default()
        })
        .run()
}
