use tracing::Level;
use tracing_subscriber::FmtSubscriber;

pub fn setup_logging(level: Level) {
    // Create a subscriber that logs to stdout
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set default tracing subscriber: {}", e);
    }
}
