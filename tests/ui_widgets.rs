use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use widgetZoom::runner::handlers;
use widgetZoom::ui::{self, layout};
use widgetZoom::{App, Focus, Mode};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn draw(app: &App) -> Terminal<TestBackend> {
    let backend = TestBackend::new(80, 24);
    let mut term = Terminal::new(backend).unwrap();
    term.draw(|f| ui::ui(f, app)).unwrap();
    term
}

fn render(app: &App) -> String {
    let term = draw(app);
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
fn gallery_renders_every_region() {
    let text = render(&App::new());
    for needle in [
        "Click Me",
        "Enter Your Name:",
        "Submit",
        "Volume",
        "Select Country",
        "ID",
        "Name",
        "Course",
        "Ready",
    ] {
        assert!(text.contains(needle), "missing {needle:?}:\n{text}");
    }
}

#[test]
fn list_entries_fixed_and_in_order() {
    let app = App::new();
    assert_eq!(app.listbox.items, vec!["Python", "Java", "C++"]);
    assert_eq!(app.listbox.selected, None);

    let text = render(&app);
    for entry in ["Python", "Java", "C++"] {
        assert!(text.contains(entry), "list entry {entry:?} not rendered:\n{text}");
    }
}

#[test]
fn table_rows_match_literals() {
    let app = App::new();
    assert_eq!(
        app.table.rows,
        vec![(1, "Nischal", "Python"), (2, "Alex", "Java")]
    );
    assert_eq!(app.table.columns, ["ID", "Name", "Course"]);

    let text = render(&app);
    assert!(text.contains("Nischal"));
    assert!(text.contains("Alex"));
}

#[test]
fn status_stays_ready_for_the_session() {
    let mut app = App::new();
    assert_eq!(app.status, "Ready");

    // Churn through everything that accepts input; nothing writes the status.
    app.focus = Focus::FormEntry;
    for c in "Nischal".chars() {
        handlers::handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
    }
    app.focus = Focus::Slider;
    for _ in 0..5 {
        handlers::handle_key(&mut app, key(KeyCode::Right)).unwrap();
    }
    app.focus = Focus::Toolbar;
    handlers::handle_key(&mut app, key(KeyCode::Enter)).unwrap();
    handlers::handle_key(&mut app, key(KeyCode::Enter)).unwrap();
    for code in [KeyCode::F(10), KeyCode::Esc] {
        handlers::handle_key(&mut app, key(code)).unwrap();
    }

    assert_eq!(app.status, "Ready");
    assert!(render(&app).contains("Ready"));
}

#[test]
fn typed_text_shows_in_entry() {
    let mut app = App::new();
    app.focus = Focus::FormEntry;
    for c in "Ada".chars() {
        handlers::handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
    }
    assert_eq!(app.form.buffer, "Ada");
    assert!(render(&app).contains("Ada"));
}

#[test]
fn tab_cycles_focus_in_declared_order() {
    let mut app = App::new();
    assert_eq!(app.focus, Focus::Toolbar);

    let expected = [
        Focus::FormEntry,
        Focus::FormSubmit,
        Focus::Slider,
        Focus::Spin,
        Focus::List,
        Focus::Dropdown,
        Focus::Table,
        Focus::Toolbar,
    ];
    for want in expected {
        handlers::handle_key(&mut app, key(KeyCode::Tab)).unwrap();
        assert_eq!(app.focus, want);
    }

    handlers::handle_key(&mut app, key(KeyCode::BackTab)).unwrap();
    assert_eq!(app.focus, Focus::Table);
}

#[test]
fn dropdown_open_choose_and_cancel() {
    let mut app = App::new();
    app.focus = Focus::Dropdown;
    assert_eq!(app.dropdown.display(), "Select Country");

    handlers::handle_key(&mut app, key(KeyCode::Enter)).unwrap();
    assert!(matches!(app.mode, Mode::Dropdown { highlighted: 0 }));

    handlers::handle_key(&mut app, key(KeyCode::Down)).unwrap();
    handlers::handle_key(&mut app, key(KeyCode::Enter)).unwrap();
    assert_eq!(app.dropdown.chosen, Some(1));
    assert_eq!(app.dropdown.display(), "USA");
    assert!(matches!(app.mode, Mode::Normal));

    // Esc leaves the earlier choice alone.
    handlers::handle_key(&mut app, key(KeyCode::Enter)).unwrap();
    handlers::handle_key(&mut app, key(KeyCode::Down)).unwrap();
    handlers::handle_key(&mut app, key(KeyCode::Esc)).unwrap();
    assert_eq!(app.dropdown.chosen, Some(1));
}

#[test]
fn slider_adjusts_only_with_focus() {
    let mut app = App::new();
    app.focus = Focus::Slider;
    for _ in 0..3 {
        handlers::handle_key(&mut app, key(KeyCode::Right)).unwrap();
    }
    assert_eq!(app.slider.value, 3);

    app.focus = Focus::Toolbar;
    handlers::handle_key(&mut app, key(KeyCode::Right)).unwrap();
    assert_eq!(app.slider.value, 3);

    app.focus = Focus::Slider;
    handlers::handle_key(&mut app, key(KeyCode::End)).unwrap();
    assert_eq!(app.slider.value, 100);
    handlers::handle_key(&mut app, key(KeyCode::Home)).unwrap();
    assert_eq!(app.slider.value, 0);
}

#[test]
fn table_highlight_clamps_at_last_row() {
    let mut app = App::new();
    app.focus = Focus::Table;
    for _ in 0..4 {
        handlers::handle_key(&mut app, key(KeyCode::Down)).unwrap();
    }
    assert_eq!(app.table.selected, Some(1));
}

#[test]
fn canvas_paints_inside_its_border() {
    let app = App::new();
    let term = draw(&app);
    let buf = term.backend().buffer();
    let area = layout::compute(Rect::new(0, 0, 80, 24)).canvas;

    let mut painted = false;
    for y in area.y + 1..area.y + area.height.saturating_sub(1) {
        for x in area.x + 1..area.x + area.width.saturating_sub(1) {
            if let Some(c) = buf.cell((x, y)) {
                if c.symbol() != " " {
                    painted = true;
                }
            }
        }
    }
    assert!(painted, "canvas interior is blank");
}
