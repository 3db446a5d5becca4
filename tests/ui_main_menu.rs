use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use widgetZoom::runner::handlers;
use widgetZoom::ui;
use widgetZoom::{App, Mode};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn render(app: &App) -> String {
    let backend = TestBackend::new(80, 24);
    let mut term = Terminal::new(backend).unwrap();
    term.draw(|f| ui::ui(f, app)).unwrap();

    let buf = term.backend().buffer();
    let mut out = String::new();
    for y in 0..24u16 {
        for x in 0..80u16 {
            if let Some(c) = buf.cell((x, y)) {
                out.push_str(c.symbol());
            }
        }
        out.push('\n');
    }
    out
}

#[test]
fn menu_bar_shows_both_menus() {
    let text = render(&App::new());
    assert!(text.contains("File"), "menu bar missing File:\n{text}");
    assert!(text.contains("Help"), "menu bar missing Help:\n{text}");
}

#[test]
fn focused_menu_label_is_bracketed() {
    let mut app = App::new();
    app.mode = Mode::Menu {
        selected: 0,
        open: false,
        sub_selected: 0,
    };
    let text = render(&app);
    assert!(text.contains("[File]"), "active label not bracketed:\n{text}");
}

#[test]
fn open_file_menu_lists_exit() {
    let mut app = App::new();
    app.mode = Mode::Menu {
        selected: 0,
        open: true,
        sub_selected: 0,
    };
    let text = render(&app);
    assert!(text.contains("Exit"), "File drop-down missing Exit:\n{text}");
}

#[test]
fn open_help_menu_lists_about() {
    let mut app = App::new();
    app.mode = Mode::Menu {
        selected: 1,
        open: true,
        sub_selected: 0,
    };
    let text = render(&app);
    assert!(text.contains("About"), "Help drop-down missing About:\n{text}");
}

#[test]
fn menu_navigation_wraps_and_escapes() {
    let mut app = App::new();

    handlers::handle_key(&mut app, key(KeyCode::F(10))).unwrap();
    assert!(matches!(
        app.mode,
        Mode::Menu {
            selected: 0,
            open: false,
            ..
        }
    ));

    handlers::handle_key(&mut app, key(KeyCode::Right)).unwrap();
    assert!(matches!(app.mode, Mode::Menu { selected: 1, .. }));

    // Two top-level menus, so another Right wraps back to File.
    handlers::handle_key(&mut app, key(KeyCode::Right)).unwrap();
    assert!(matches!(app.mode, Mode::Menu { selected: 0, .. }));

    handlers::handle_key(&mut app, key(KeyCode::Esc)).unwrap();
    assert!(matches!(app.mode, Mode::Normal));
}

#[test]
fn esc_from_open_dropdown_closes_it_first() {
    let mut app = App::new();
    handlers::handle_key(&mut app, key(KeyCode::F(1))).unwrap();
    handlers::handle_key(&mut app, key(KeyCode::Down)).unwrap();
    assert!(matches!(app.mode, Mode::Menu { open: true, .. }));

    handlers::handle_key(&mut app, key(KeyCode::Esc)).unwrap();
    assert!(matches!(app.mode, Mode::Menu { open: false, .. }));

    handlers::handle_key(&mut app, key(KeyCode::Esc)).unwrap();
    assert!(matches!(app.mode, Mode::Normal));
}
