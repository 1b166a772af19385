//! Raw-mode terminal setup and teardown.

use anyhow::Result;
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, info, warn};

/// Terminal handle the game loop draws on.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs a teardown function on drop, so the terminal is restored on early
/// returns and while unwinding from a panic.
pub struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    fn new(restore: fn()) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        (self.restore)();
    }
}

/// Switches to raw mode and the alternate screen.
///
/// The guard exists from the moment raw mode is on; a failure in any later
/// setup step drops it and leaves the terminal as it was found.
pub fn enter() -> Result<(Tui, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::new(restore);
    install_panic_hook();

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    info!("Terminal entered raw mode");
    Ok((terminal, guard))
}

/// Undoes [`enter`]. Each step runs even if an earlier one failed.
fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, LeaveAlternateScreen, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
}

/// Restores the terminal before the default hook prints, so the panic
/// message lands on the normal screen.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_guard_restores_on_drop() {
        static RESTORED: AtomicUsize = AtomicUsize::new(0);
        fn count() {
            RESTORED.fetch_add(1, Ordering::SeqCst);
        }

        let guard = TerminalGuard::new(count);
        assert_eq!(RESTORED.load(Ordering::SeqCst), 0);
        drop(guard);
        assert_eq!(RESTORED.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        static RESTORED: AtomicUsize = AtomicUsize::new(0);
        fn count() {
            RESTORED.fetch_add(1, Ordering::SeqCst);
        }

        fn failing_setup() -> Result<()> {
            let _guard = TerminalGuard::new(count);
            anyhow::bail!("alternate screen unavailable");
        }

        assert!(failing_setup().is_err());
        assert_eq!(RESTORED.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_guard_restores_while_unwinding() {
        static RESTORED: AtomicUsize = AtomicUsize::new(0);
        fn count() {
            RESTORED.fetch_add(1, Ordering::SeqCst);
        }

        let result = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard::new(count);
            panic!("game loop panicked");
        });

        assert!(result.is_err());
        assert_eq!(RESTORED.load(Ordering::SeqCst), 1);
    }
}
