use std::io;
use std::sync::mpsc;
use std::time::Duration;

use codigo::app::Workbench;
use codigo::core::event::InputEvent;
use codigo::kernel::demo::demo_project;
use codigo::kernel::services::adapters::{
    ensure_settings_file, load_settings, AppMessage, AsyncRuntime, KeybindingService,
};
use codigo::kernel::services::ports::{IdeConfig, Settings};
use codigo::kernel::AppState;
use codigo::tui::terminal_guard::{install_panic_restore, TerminalGuard, TerminationSignal};
use codigo::tui::view::View;
use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> io::Result<()> {
    let mut logging = logging::init();
    let log_rx = logging.as_mut().and_then(|guard| guard.take_panel_rx());

    if let Err(err) = ensure_settings_file() {
        tracing::warn!(error = %err, "settings file unavailable");
    }
    let settings: Settings = load_settings().unwrap_or_default();
    let config = IdeConfig::from_settings(&settings);

    let mut keybindings = KeybindingService::new();
    keybindings.apply_rules(&settings.keybindings);

    let (tree, buffers) = demo_project();
    let state = AppState::new(tree, buffers, config);

    let (msg_tx, msg_rx) = mpsc::channel::<AppMessage>();
    let runtime = AsyncRuntime::new(msg_tx)?;
    let mut workbench = Workbench::new(state, keybindings, runtime, log_rx);

    let guard = TerminalGuard::new()?;
    install_panic_restore(guard.restorer());

    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    {
        if let Err(err) =
            codigo::tui::terminal_guard::install_termination_signals(guard.restorer(), signal_tx)
        {
            tracing::warn!(error = %err, "termination signals not installed");
        }
    }
    #[cfg(not(unix))]
    drop(signal_tx);

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let exit_signal = run(&mut terminal, &mut workbench, &msg_rx, &signal_rx);

    drop(terminal);
    drop(guard);
    drop(workbench);

    match exit_signal? {
        Some(signal) => {
            tracing::info!(?signal, "terminated by signal");
            std::process::exit(signal.exit_code());
        }
        None => {
            tracing::info!("codigo exited");
            Ok(())
        }
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    workbench: &mut Workbench,
    msg_rx: &mpsc::Receiver<AppMessage>,
    signal_rx: &mpsc::Receiver<TerminationSignal>,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;

    loop {
        if let Ok(signal) = signal_rx.try_recv() {
            return Ok(Some(signal));
        }

        while let Ok(msg) = msg_rx.try_recv() {
            dirty |= workbench.handle_message(msg);
        }
        dirty |= workbench.tick();

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
                if let Some((x, y)) = workbench.cursor_position() {
                    frame.set_cursor_position((x, y));
                }
            })?;
            dirty = false;
            // Sizes measured during the draw may move the explorer viewport.
            if workbench.flush_post_render_sync() {
                dirty = true;
            }
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let Some(input) = InputEvent::from_terminal(event::read()?) else {
            continue;
        };
        let result = workbench.handle_input(&input);
        if result.is_quit() {
            return Ok(None);
        }
        dirty |= result.is_consumed() || matches!(input, InputEvent::Resize(..));
    }
}
