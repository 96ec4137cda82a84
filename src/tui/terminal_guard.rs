use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How long a termination signal waits for the frame loop to wind down
/// before the terminal is restored from the signal thread.
pub const SIGNAL_GRACE: Duration = Duration::from_secs(2);

/// Terminal mode switches, behind a trait so the guard can be tested
/// without a tty.
pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

/// Keyboard protocol flags requested when the terminal supports them. With
/// event types reported, a held key arrives as `Repeat` instead of a stream
/// of `Press` events, which keeps action keys edge-triggered.
pub fn keyboard_enhancement_flags() -> crossterm::event::KeyboardEnhancementFlags {
    crossterm::event::KeyboardEnhancementFlags::REPORT_EVENT_TYPES
}

#[derive(Debug, Default)]
pub struct CrosstermTerminalOps {
    enhanced: AtomicBool,
}

impl CrosstermTerminalOps {
    /// Whether setup pushed keyboard enhancement flags that restore must pop.
    pub fn is_enhanced(&self) -> bool {
        self.enhanced.load(Ordering::SeqCst)
    }
}

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            io::stdout(),
            crossterm::terminal::EnterAlternateScreen,
            crossterm::cursor::Hide
        )?;

        // Needs raw mode: the support check queries the terminal.
        match crossterm::terminal::supports_keyboard_enhancement() {
            Ok(true) => {
                let flags = keyboard_enhancement_flags();
                crossterm::execute!(
                    io::stdout(),
                    crossterm::event::PushKeyboardEnhancementFlags(flags)
                )?;
                self.enhanced.store(true, Ordering::SeqCst);
            }
            Ok(false) => tracing::debug!("keyboard enhancement unsupported"),
            Err(err) => tracing::debug!(error = %err, "keyboard enhancement query failed"),
        }
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        let popped = if self.enhanced.swap(false, Ordering::SeqCst) {
            crossterm::execute!(io::stdout(), crossterm::event::PopKeyboardEnhancementFlags)
        } else {
            Ok(())
        };
        let raw = crossterm::terminal::disable_raw_mode();
        let screen = crossterm::execute!(
            io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        popped.and(raw).and(screen)
    }
}

/// Shared handle that puts the terminal back. Only the first call does any
/// work, whichever thread makes it.
#[derive(Clone)]
pub struct TerminalRestorer {
    done: Arc<AtomicBool>,
    ops: Arc<dyn TerminalOps>,
}

impl TerminalRestorer {
    fn new(ops: Arc<dyn TerminalOps>) -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
            ops,
        }
    }

    pub fn restore(&self) -> io::Result<()> {
        match self.done.swap(true, Ordering::SeqCst) {
            true => Ok(()),
            false => self.ops.restore(),
        }
    }

    pub fn is_restored(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }
}

/// Raw mode and the alternate screen, held for the guard's lifetime.
pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps::default()))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        let restorer = TerminalRestorer::new(ops);
        Ok(Self { restorer })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = self.restorer.restore() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    /// Shell convention: 128 plus the signal number.
    pub fn exit_code(self) -> i32 {
        128 + match self {
            TerminationSignal::SigInt => 2,
            TerminationSignal::SigTerm => 15,
        }
    }

    #[cfg(unix)]
    fn from_raw(sig: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};
        match sig {
            SIGINT => Some(TerminationSignal::SigInt),
            SIGTERM => Some(TerminationSignal::SigTerm),
            _ => None,
        }
    }
}

/// Raise `quit` on SIGINT/SIGTERM. If the process is still alive after
/// [`SIGNAL_GRACE`], restore the terminal and exit with the signal's code.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    quit: Arc<AtomicBool>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    std::thread::Builder::new()
        .name("padnav-signals".into())
        .spawn(move || {
            let Some(signal) = signals
                .forever()
                .find_map(TerminationSignal::from_raw)
            else {
                return;
            };
            tracing::info!(?signal, "termination signal");
            quit.store(true, Ordering::SeqCst);

            std::thread::sleep(SIGNAL_GRACE);
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        })
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
