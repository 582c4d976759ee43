use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::controller::{Tab, UiEvent, ViewState};
use crate::display::TimestampMode;
use crate::remote::{QrApi, QrClient};

mod app;
mod modal;
mod view;
mod views;

use self::app::App;
use self::view::{RenderCtx, View, message_line, render_view_chrome};

pub(crate) fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        anyhow::bail!("TUI requires an interactive terminal (TTY)");
    }

    let client = QrClient::new(&opts.base_url)?;
    let base_url = client.base_url().to_string();
    let mut app = App::new(client, base_url);
    tracing::info!(event = "tui.session.started", base_url = %app.state.base_url);

    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
        .context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    app.start();
    let res = app::event_loop::run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .ok();
    terminal.show_cursor().ok();

    tracing::info!(event = "tui.session.ended", ok = res.is_ok());
    res
}

#[cfg(test)]
#[path = "tests/tui_shell/render_tests.rs"]
mod render_tests;

#[cfg(test)]
#[path = "tests/tui_shell/key_tests.rs"]
mod key_tests;
