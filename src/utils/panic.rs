use std::{panic, process};

use color_eyre::{config::HookBuilder, eyre::Result};

use crate::infrastructure::tui::real::RealTui;

/// Installs color-eyre hooks plus a panic hook that hands the terminal back
/// before the report is written.
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "homedash crashed. Please report it at {}",
            env!("CARGO_PKG_REPOSITORY")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |info| {
        if let Err(e) = RealTui::restore_terminal() {
            tracing::error!("could not restore terminal: {e:?}");
        }

        let report = panic_hook.panic_report(info).to_string();
        tracing::error!("panic: {}", strip_ansi_escapes::strip_str(&report));

        if cfg!(debug_assertions) {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(info);
        } else {
            let meta = human_panic::Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
                .homepage(env!("CARGO_PKG_HOMEPAGE"));
            let dump = human_panic::handle_dump(&meta, info);
            if human_panic::print_msg(dump, &meta).is_err() {
                eprintln!("{report}");
            }
        }

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}
