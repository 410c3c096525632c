//! Marquee entrypoint: scrolls a `%`-art banner around the terminal.
//!
//! Keys: `w`/`a`/`s`/`d` change direction, ESC (or Ctrl+C) quits.
use anyhow::Result;
use clap::Parser;
use core_config::{Config, ConfigContext};
use core_events::FrameClock;
use core_grid::ScrollBuffer;
use core_input::CrosstermKeySource;
use core_render::Renderer;
use core_terminal::{CrosstermBackend, TerminalGuard, TerminalSize};
use marquee::MainLoop;
use std::ffi::OsStr;
use std::path::Path;
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments. Only `--help` and `--version`; behavior is fixed.
#[derive(Parser, Debug)]
#[command(
    name = "marquee",
    version,
    about = "Scroll an ASCII-art banner around the terminal (w/a/s/d to steer, Esc to quit)"
)]
struct Args {}

struct AppStartup {
    backend: CrosstermBackend,
    log_guard: Option<WorkerGuard>,
}

struct RuntimeContext<'a> {
    buffer: ScrollBuffer,
    config: Config,
    terminal_guard: TerminalGuard<'a>,
}

impl AppStartup {
    fn new() -> Self {
        Self {
            backend: CrosstermBackend::new(),
            log_guard: None,
        }
    }

    fn run<'a>(&'a mut self, mut config: Config) -> Result<RuntimeContext<'a>> {
        self.configure_logging(&config.log_file)?;
        Self::install_panic_hook();

        info!(target: "runtime", version = env!("CARGO_PKG_VERSION"), "startup");

        let buffer = ScrollBuffer::with_banner()?;
        let size = TerminalSize::query();
        let fits = config.apply_context(
            ConfigContext::new(size.columns, size.rows),
            buffer.grid().cols(),
            buffer.grid().rows(),
        );
        info!(
            target: "runtime.startup",
            columns = size.columns,
            rows = size.rows,
            grid_cols = buffer.grid().cols(),
            grid_rows = buffer.grid().rows(),
            fits,
            frame_interval_ms = config.frame_interval.as_millis() as u64,
            "bootstrap_complete"
        );

        let guard = self.backend.enter_guard()?;
        Ok(RuntimeContext {
            buffer,
            config,
            terminal_guard: guard,
        })
    }

    fn configure_logging(&mut self, log_path: &Path) -> Result<()> {
        let log_dir = match log_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let file_name = log_path
            .file_name()
            .unwrap_or_else(|| OsStr::new(core_config::LOG_FILE_NAME));
        let full = log_dir.join(file_name);
        if full.exists() {
            let _ = std::fs::remove_file(&full);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, file_name);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(nb_writer)
            .with_ansi(false)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global tracing subscriber already installed; drop guard so writer shuts down.
            }
        }

        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                // The guard only drops after the report; restore before it.
                let _ = core_terminal::restore_to(&mut std::io::stdout());
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

fn main() -> Result<()> {
    let _args = Args::parse();

    let mut startup = AppStartup::new();
    let RuntimeContext {
        buffer,
        config,
        terminal_guard,
    } = startup.run(Config::default())?;

    let mut keys = CrosstermKeySource::new();
    let mut clock = FrameClock::new(config.frame_interval);
    let mut main_loop = MainLoop::new(buffer, Renderer::stdout());
    let reason = main_loop.run(&mut keys, &mut clock)?;

    terminal_guard.release()?;
    let (polled, decoded) = keys.counters();
    info!(
        target: "runtime.shutdown",
        reason = reason.as_str(),
        state = ?main_loop.state(),
        ticks = main_loop.buffer().ticks(),
        frames_drawn = main_loop.renderer().metrics_snapshot().frames,
        frames_paced = clock.frames(),
        polled,
        decoded,
        "terminal_restored"
    );
    Ok(())
}
