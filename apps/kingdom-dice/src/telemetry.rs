use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the JSON tracing subscriber for a host process.
///
/// `RUST_LOG` overrides the default filter. Safe to call once per process;
/// later calls are ignored.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kingdom_dice=info"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .ok();
}
