use widgetZoom::logging;
use widgetZoom::runner::run_app;

fn main() {
    let _log_guard = logging::init();
    tracing::info!("widgetZoom starting");

    if let Err(err) = run_app() {
        tracing::error!("fatal: {err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
