use super::*;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockOps {
    fail_setup: bool,
    calls: Mutex<Vec<&'static str>>,
}

impl TerminalOps for MockOps {
    fn setup(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("setup");
        if self.fail_setup {
            return Err(std::io::Error::new(std::io::ErrorKind::Other, "no tty"));
        }
        Ok(())
    }

    fn restore(&self) -> std::io::Result<()> {
        self.calls.lock().unwrap().push("restore");
        Ok(())
    }
}

#[test]
fn guard_restores_on_drop() {
    let ops = Arc::new(MockOps::default());
    {
        let _guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    }
    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn restorer_runs_once_across_clones() {
    let ops = Arc::new(MockOps::default());
    let guard = TerminalGuard::with_ops(ops.clone()).unwrap();
    let first = guard.restorer();
    let second = first.clone();
    assert!(!first.is_restored());

    first.restore().unwrap();
    second.restore().unwrap();
    assert!(second.is_restored());
    drop(guard);

    assert_eq!(&*ops.calls.lock().unwrap(), &["setup", "restore"]);
}

#[test]
fn failed_setup_yields_no_guard() {
    let ops = Arc::new(MockOps {
        fail_setup: true,
        ..MockOps::default()
    });
    assert!(TerminalGuard::with_ops(ops.clone()).is_err());
    assert_eq!(&*ops.calls.lock().unwrap(), &["setup"]);
}

#[test]
fn signal_exit_codes() {
    assert_eq!(TerminationSignal::SigInt.exit_code(), 130);
    assert_eq!(TerminationSignal::SigTerm.exit_code(), 143);
}

#[test]
fn held_keys_are_reported_as_repeats_when_supported() {
    use crossterm::event::KeyboardEnhancementFlags;

    assert!(keyboard_enhancement_flags().contains(KeyboardEnhancementFlags::REPORT_EVENT_TYPES));
    // Nothing is pushed until setup has found a capable terminal.
    assert!(!CrosstermTerminalOps::default().is_enhanced());
}
