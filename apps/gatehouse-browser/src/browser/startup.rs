use super::*;

pub(crate) fn run() -> Result<(), eframe::Error> {
    init_logging();
    install_panic_logger();

    let gateway = match Gateway::new(STATIC_HOST) {
        Ok(gateway) => gateway,
        Err(error) => {
            log::error!("Gatehouse startup error: {error}");
            return Ok(());
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Ok(Box::new(ShellApp::new(gateway)))),
    )
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Event-handling code must not take the process down silently: panics are
/// logged with their backtrace before the default unwind continues.
fn install_panic_logger() {
    std::panic::set_hook(Box::new(|info| {
        let trace = std::backtrace::Backtrace::force_capture();
        log::error!("ERROR: {info}\n{trace}");
    }));
}
