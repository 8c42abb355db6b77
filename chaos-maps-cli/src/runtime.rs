use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use chaos_maps::ChaosError;
use log::{warn, LevelFilter};

/// Exit code for invalid or missing arguments and rejected parameters.
pub const EXIT_USAGE: i32 = 2;

/// Exit code when the user interrupts the program.
pub const EXIT_INTERRUPTED: i32 = 3;

/// Initialise `env_logger`. `RUST_LOG` overrides the `-v` count.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let env = env_logger::Env::default().default_filter_or(level.to_string());
    if let Err(err) = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
    {
        eprintln!("(warn) logger already initialised: {err}");
    }
}

/// Message printed when the user interrupts a tool.
pub const INTERRUPTED_MESSAGE: &str = "Exiting on user request";

/// Install a Ctrl-C handler that ends the process at once with [`EXIT_INTERRUPTED`].
///
/// For tools whose computation cannot be cancelled midway.
pub fn exit_on_interrupt(prog: &'static str) -> Result<()> {
    ctrlc::set_handler(move || {
        eprintln!("{prog}: error: {INTERRUPTED_MESSAGE}");
        std::process::exit(EXIT_INTERRUPTED);
    })
    .context("failed to install the Ctrl-C handler")
}

/// Install a Ctrl-C handler and return the flag it raises.
///
/// The work polls the flag; call [`ensure_not_interrupted`] before reporting
/// success so an interrupt raised late still ends in [`EXIT_INTERRUPTED`].
pub fn interrupt_flag() -> Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    let handler_flag = flag.clone();
    ctrlc::set_handler(move || {
        warn!("interrupt received, stopping");
        handler_flag.store(true, Ordering::Relaxed);
    })
    .context("failed to install the Ctrl-C handler")?;
    Ok(flag)
}

/// Fail with [`ChaosError::Cancelled`] if the interrupt flag is raised.
pub fn check_interrupted(flag: &AtomicBool) -> Result<(), ChaosError> {
    if flag.load(Ordering::Relaxed) {
        Err(ChaosError::Cancelled)
    } else {
        Ok(())
    }
}

/// Last check before a tool returns success.
pub fn ensure_not_interrupted(flag: &AtomicBool) -> Result<()> {
    check_interrupted(flag).context("interrupted before completion")
}

/// Exit code for an error: 3 when cancelled, 2 otherwise.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    let cancelled = err
        .chain()
        .any(|cause| matches!(cause.downcast_ref::<ChaosError>(), Some(ChaosError::Cancelled)));
    if cancelled {
        EXIT_INTERRUPTED
    } else {
        EXIT_USAGE
    }
}

/// Print `prog: error: msg` on stderr and exit with the matching code.
pub fn die(prog: &str, err: &anyhow::Error) -> ! {
    let message = if exit_code(err) == EXIT_INTERRUPTED {
        INTERRUPTED_MESSAGE.to_string()
    } else {
        format!("{err:#}")
    };
    eprintln!("{prog}: error: {message}");
    std::process::exit(exit_code(err))
}
