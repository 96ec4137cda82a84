use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use padnav::app::App;
use padnav::core::{input_queue, InputProcessor, InputQueue, Keymap};
use padnav::services::settings;
use padnav::tui::crossterm::into_input_event;
use padnav::tui::terminal_guard::TerminalGuard;
use padnav::ui::backend::terminal::RatatuiTerminal;

mod logging;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn main() -> io::Result<()> {
    let logging = logging::init();
    if let Err(err) = settings::ensure_settings_file() {
        tracing::warn!(error = %err, "cannot create settings file");
    }
    let settings = settings::load_or_default();

    let guard = TerminalGuard::new()?;
    let quit = Arc::new(AtomicBool::new(false));

    install_signals(&guard, &quit);

    let (sender, queue) = input_queue(settings.input.queue_capacity);
    let keymap = Keymap::with_rules(&settings.keybindings);
    let processor = InputProcessor::new(keymap, &settings.input, sender);
    let input_thread = spawn_input_thread(processor, quit.clone())?;

    let mut app = App::new(&settings);
    let result = RatatuiTerminal::new(io::stdout())
        .and_then(|mut terminal| run(&mut app, &mut terminal, &queue, &quit));

    quit.store(true, Ordering::SeqCst);
    if input_thread.join().is_err() {
        tracing::error!("input thread panicked");
    }
    drop(guard);
    if let Err(err) = &result {
        tracing::error!(error = %err, "frame loop failed");
    }
    tracing::info!("shutdown");
    drop(logging);
    result
}

#[cfg(unix)]
fn install_signals(guard: &TerminalGuard, quit: &Arc<AtomicBool>) {
    use padnav::tui::terminal_guard::install_termination_signals;

    if let Err(err) = install_termination_signals(guard.restorer(), quit.clone()) {
        tracing::warn!(error = %err, "signal handlers not installed");
    }
}

#[cfg(not(unix))]
fn install_signals(_guard: &TerminalGuard, _quit: &Arc<AtomicBool>) {}

/// Read terminal events until `quit` is raised. Key events are mapped,
/// throttled and queued for the frame loop; Ctrl-C raises `quit`.
fn spawn_input_thread(
    mut processor: InputProcessor,
    quit: Arc<AtomicBool>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("padnav-input".into())
        .spawn(move || {
            while !quit.load(Ordering::SeqCst) {
                match crossterm::event::poll(POLL_INTERVAL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(err) => {
                        tracing::error!(error = %err, "input poll failed");
                        quit.store(true, Ordering::SeqCst);
                        break;
                    }
                }
                let event = match crossterm::event::read() {
                    Ok(event) => event,
                    Err(err) => {
                        tracing::error!(error = %err, "input read failed");
                        quit.store(true, Ordering::SeqCst);
                        break;
                    }
                };
                let Some(event) = into_input_event(event) else {
                    continue;
                };
                if event.is_interrupt() {
                    tracing::info!("interrupt");
                    quit.store(true, Ordering::SeqCst);
                    break;
                }
                if let Some(key) = event.as_key() {
                    processor.process(key, Instant::now());
                }
            }
        })
}

fn run(
    app: &mut App,
    terminal: &mut RatatuiTerminal,
    queue: &InputQueue,
    quit: &AtomicBool,
) -> io::Result<()> {
    while app.is_running() && !quit.load(Ordering::SeqCst) {
        let frame_start = Instant::now();
        for direction in queue.drain() {
            app.handle_input(direction);
            if !app.is_running() {
                return Ok(());
            }
        }
        terminal.draw(|backend, area| app.render(backend, area))?;
        if let Some(rest) = FRAME_INTERVAL.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
    Ok(())
}
