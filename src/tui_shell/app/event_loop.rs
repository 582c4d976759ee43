use super::*;

pub(in crate::tui_shell) fn run_loop<A: QrApi>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App<A>,
) -> Result<()> {
    loop {
        let ctx = app.render_ctx();
        terminal
            .draw(|f| super::render::draw(f, &app.state, &ctx))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        // Queued requests run one per frame, after the loading state is drawn.
        if app.busy() {
            app.step();
            continue;
        }

        if event::poll(Duration::from_millis(250)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                Event::Paste(text) => handle_paste(app, &text),
                _ => {}
            }
        }
    }
}

pub(in crate::tui_shell) fn handle_key<A: QrApi>(app: &mut App<A>, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        app.quit = true;
        return;
    }

    if app.state.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dispatch(UiEvent::DismissAlert);
        }
        return;
    }

    if app.state.confirm.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.dispatch(UiEvent::ConfirmDelete(true))
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.dispatch(UiEvent::ConfirmDelete(false))
            }
            _ => {}
        }
        return;
    }

    if app.state.edit.is_some() {
        handle_edit_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Tab => {
            let tab = app.state.active_tab.next();
            app.dispatch(UiEvent::SelectTab(tab));
        }
        KeyCode::BackTab => {
            let tab = app.state.active_tab.prev();
            app.dispatch(UiEvent::SelectTab(tab));
        }
        KeyCode::F(n @ 1..=3) => {
            let tab = Tab::ALL[usize::from(n) - 1];
            app.dispatch(UiEvent::SelectTab(tab));
        }
        KeyCode::Esc => {
            app.quit = true;
        }
        _ => match app.state.active_tab {
            Tab::Generate => handle_generate_key(app, key),
            Tab::List => handle_list_key(app, key),
            Tab::Data => handle_data_key(app, key),
        },
    }
}

/// Pasted text lands in whichever text field has focus.
pub(in crate::tui_shell) fn handle_paste<A: QrApi>(app: &mut App<A>, text: &str) {
    if app.state.alert.is_some() || app.state.confirm.is_some() {
        return;
    }
    if let Some(edit) = app.state.edit.as_mut() {
        edit.field.insert_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
        return;
    }
    if app.state.active_tab == Tab::Generate {
        // Dropped files often arrive quoted and newline-terminated.
        let path = text.trim().trim_matches(|c| c == '\'' || c == '"');
        app.state.upload.file.insert_str(path);
    }
}

fn handle_generate_key<A: QrApi>(app: &mut App<A>, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => {
            app.dispatch(UiEvent::SubmitUpload);
            return;
        }
        KeyCode::Char('o') if ctrl => {
            app.dispatch(UiEvent::ViewGeneratedImage);
            return;
        }
        _ => {}
    }

    let field = &mut app.state.upload.file;
    match key.code {
        KeyCode::Char('u') if ctrl => field.clear(),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            field.insert_char(c)
        }
        _ => {}
    }
}

fn handle_list_key<A: QrApi>(app: &mut App<A>, key: KeyEvent) {
    let selected = app
        .state
        .list
        .selected_record()
        .map(|r| (r.id.clone(), r.qrcode_url.clone()));

    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.dispatch(UiEvent::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') => app.dispatch(UiEvent::SelectNext),
        KeyCode::Char('r') => app.dispatch(UiEvent::RefreshList),
        KeyCode::Char('t') => app.ts_mode = app.ts_mode.toggle(),
        KeyCode::Enter | KeyCode::Char('v') => {
            if let Some((_, qrcode_url)) = selected {
                app.dispatch(UiEvent::ViewImage { qrcode_url });
            }
        }
        KeyCode::Char('e') => {
            if let Some((id, _)) = selected {
                app.dispatch(UiEvent::OpenEdit { id });
            }
        }
        KeyCode::Char('d') => {
            if let Some((id, _)) = selected {
                app.dispatch(UiEvent::RequestDelete { id });
            }
        }
        _ => {}
    }
}

fn handle_data_key<A: QrApi>(app: &mut App<A>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Char('r') => app.dispatch(UiEvent::RefreshData),
        _ => {}
    }
}

fn handle_edit_key<A: QrApi>(app: &mut App<A>, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => {
            app.dispatch(UiEvent::CloseEdit);
            return;
        }
        KeyCode::Char('s') if ctrl => {
            app.dispatch(UiEvent::SaveEdit);
            return;
        }
        _ => {}
    }

    let Some(edit) = app.state.edit.as_mut() else {
        return;
    };
    let field = &mut edit.field;
    match key.code {
        KeyCode::Enter => field.insert_char('\n'),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            field.insert_char(c)
        }
        _ => {}
    }
}
