//! Terminal setup and the event loop.

use crate::{app::App, config::TuiConfig, ui};
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument, warn};

/// Runs the game until the user quits.
///
/// The terminal is restored before any error is returned, and before the
/// panic message is printed if the game panics.
#[instrument(skip_all)]
pub fn run(config: &TuiConfig) -> Result<()> {
    info!("Starting terminal UI");

    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new();
    let res = run_loop(&mut terminal, &mut app, config.show_help());

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(
        rounds = app.session().scoreboard().rounds_played(),
        "Terminal UI closed"
    );
    res
}

/// Raw mode and the alternate screen, undone on drop.
///
/// Created as soon as raw mode is on, so every later `?` and every unwind
/// passes through [`restore_terminal`].
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Restores the terminal before the previous hook prints the panic message.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        previous(info);
    }));
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Safe to call more than once. Failures are logged; none stops the
/// remaining steps.
fn restore_terminal() {
    let steps: [RestoreStep<'_>; 3] = [
        ("disable raw mode", &disable_raw_mode),
        ("leave alternate screen", &|| execute!(io::stdout(), LeaveAlternateScreen)),
        ("show cursor", &|| execute!(io::stdout(), Show)),
    ];
    run_restore_steps(&steps);
}

type RestoreStep<'a> = (&'static str, &'a dyn Fn() -> io::Result<()>);

/// Runs every step, returning how many failed.
fn run_restore_steps(steps: &[RestoreStep<'_>]) -> usize {
    let mut failed = 0;
    for (name, step) in steps {
        if let Err(e) = step() {
            warn!(step = *name, error = %e, "Terminal restore step failed");
            failed += 1;
        }
    }
    failed
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    show_help: bool,
) -> Result<()> {
    while app.is_running() {
        terminal.draw(|f| ui::draw(f, app, show_help))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_step_does_not_skip_the_rest() {
        let ran = Cell::new(0);
        let fail = || -> io::Result<()> {
            ran.set(ran.get() + 1);
            Err(io::Error::other("not a tty"))
        };
        let succeed = || -> io::Result<()> {
            ran.set(ran.get() + 1);
            Ok(())
        };
        let steps: [RestoreStep<'_>; 3] = [
            ("disable raw mode", &fail),
            ("leave alternate screen", &succeed),
            ("show cursor", &fail),
        ];

        assert_eq!(run_restore_steps(&steps), 2);
        assert_eq!(ran.get(), 3);
    }

    #[test]
    fn test_all_steps_succeeding_reports_no_failures() {
        let ok = || -> io::Result<()> { Ok(()) };
        let steps: [RestoreStep<'_>; 2] = [("first", &ok), ("second", &ok)];
        assert_eq!(run_restore_steps(&steps), 0);
    }
}
