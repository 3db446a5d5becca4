use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use widgetZoom::runner::handlers;
use widgetZoom::ui::layout;
use widgetZoom::{App, Focus, Mode};

const TERM: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 24,
};

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn click_toolbar_button_opens_ack_dialog() {
    let mut app = App::new();
    let l = layout::compute(TERM);

    handlers::handle_mouse(&mut app, click(l.toolbar_button.x, l.toolbar_button.y), TERM).unwrap();
    match &app.mode {
        Mode::Message { title, content, .. } => {
            assert_eq!(title, "Event Triggered");
            assert_eq!(content, "Button Clicked Successfully!");
        }
        other => panic!("expected dialog, got {other:?}"),
    }
}

#[test]
fn click_submit_matches_toolbar_dialog() {
    let l = layout::compute(TERM);

    let mut via_toolbar = App::new();
    handlers::handle_mouse(
        &mut via_toolbar,
        click(l.toolbar_button.x, l.toolbar_button.y),
        TERM,
    )
    .unwrap();

    let mut via_submit = App::new();
    handlers::handle_mouse(&mut via_submit, click(l.form_submit.x + 1, l.form_submit.y + 1), TERM)
        .unwrap();

    assert_eq!(via_toolbar.mode, via_submit.mode);
}

#[test]
fn click_on_slider_moves_focus() {
    let mut app = App::new();
    let l = layout::compute(TERM);

    handlers::handle_mouse(
        &mut app,
        click(l.slider.x + l.slider.width / 2, l.slider.y + 1),
        TERM,
    )
    .unwrap();
    assert_eq!(app.focus, Focus::Slider);
    assert!(matches!(app.mode, Mode::Normal));
}

#[test]
fn click_dismisses_open_dialog() {
    let mut app = App::new();
    app.open_message("Event Triggered", "Button Clicked Successfully!");

    handlers::handle_mouse(&mut app, click(0, 0), TERM).unwrap();
    assert!(matches!(app.mode, Mode::Normal));
}

#[test]
fn click_menu_bar_opens_file_dropdown() {
    let mut app = App::new();
    let l = layout::compute(TERM);

    handlers::handle_mouse(&mut app, click(l.menu.x + 1, l.menu.y), TERM).unwrap();
    assert!(matches!(
        app.mode,
        Mode::Menu {
            selected: 0,
            open: true,
            ..
        }
    ));
}

#[test]
fn non_left_buttons_are_ignored() {
    let mut app = App::new();
    let l = layout::compute(TERM);
    let event = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Right),
        column: l.toolbar_button.x,
        row: l.toolbar_button.y,
        modifiers: KeyModifiers::NONE,
    };

    handlers::handle_mouse(&mut app, event, TERM).unwrap();
    assert!(matches!(app.mode, Mode::Normal));
}
