use ratatui::style::{Color, Style};
use widgetZoom::ui::{colors, Theme};

#[test]
fn palette_table_parses_hex_colors() {
    let theme = Theme::from_toml(
        "[palette]\nbg = \"#101010\"\nfg = \"#e0e0e0\"\naccent = \"#00ffcc\"\n",
    )
    .unwrap();
    assert_eq!(theme.bg, Color::Rgb(0x10, 0x10, 0x10));
    assert_eq!(theme.fg, Color::Rgb(0xe0, 0xe0, 0xe0));
    assert_eq!(theme.accent, Color::Rgb(0x00, 0xff, 0xcc));
}

#[test]
fn missing_palette_falls_back_to_dark() {
    let theme = Theme::from_toml("").unwrap();
    assert_eq!(theme.bg, Theme::dark().bg);
    assert_eq!(theme.accent, Theme::dark().accent);
}

#[test]
fn bad_toml_is_an_error() {
    assert!(Theme::from_toml("not = [toml").is_err());
}

// The only test that touches the process-wide style registry; the render
// tests never assert on styles, so parallel execution stays safe.
#[test]
fn set_theme_updates_the_style_registry() {
    colors::set_theme("light");
    let styles = colors::current();
    assert_eq!(
        styles.menu_style,
        Style::default().fg(Color::Black).bg(Color::White)
    );
}

#[test]
fn malformed_hex_degrades_to_reset() {
    let theme = Theme::from_toml(
        "[palette]\nbg = \"nope\"\nfg = \"#e0e0e0\"\naccent = \"#00ffcc\"\n",
    )
    .unwrap();
    assert_eq!(theme.bg, Color::Reset);
}
