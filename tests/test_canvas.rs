use line_shooter::canvas::Canvas;

#[test]
fn new_canvas_is_blank() {
    let c = Canvas::new(10);
    assert_eq!(c.size(), 10);
    assert_eq!(c.as_string(), " ".repeat(10));
}

#[test]
fn draw_single_glyph() {
    let mut c = Canvas::new(10);
    c.draw("P", 3, true);
    assert_eq!(c.as_string(), "   P      ");
    assert_eq!(c.cell(3), Some('P'));
    assert_eq!(c.cell(4), Some(' '));
}

#[test]
fn invisible_draw_is_noop() {
    let mut c = Canvas::new(10);
    c.draw("ab", 1, true);
    let before = c.clone();
    c.draw("XYZ", 0, false);
    assert_eq!(c, before);
}

#[test]
fn draw_clips_left_edge() {
    let mut c = Canvas::new(5);
    c.draw("abc", -2, true);
    assert_eq!(c.as_string(), "c    ");
}

#[test]
fn draw_clips_right_edge() {
    let mut c = Canvas::new(5);
    c.draw("abc", 3, true);
    assert_eq!(c.as_string(), "   ab");
}

#[test]
fn draw_fully_outside_leaves_buffer_unchanged() {
    let mut c = Canvas::new(5);
    c.draw("E", 2, true);
    c.draw("xyz", 5, true);
    c.draw("xyz", -3, true);
    c.draw(">", 1_000, true);
    c.draw("<", i32::MIN, true);
    assert_eq!(c.as_string(), "  E  ");
}

#[test]
fn later_draws_overwrite() {
    let mut c = Canvas::new(6);
    c.draw("EEE", 1, true);
    c.draw(">", 2, true);
    assert_eq!(c.as_string(), " E>E  ");
}

#[test]
fn clear_blanks_everything() {
    let mut c = Canvas::new(4);
    c.draw("abcd", 0, true);
    c.clear();
    assert_eq!(c.as_string(), "    ");
}

#[test]
fn render_rewrites_same_line() {
    let mut c = Canvas::new(4);
    c.draw("P", 0, true);
    let mut out: Vec<u8> = Vec::new();
    c.render(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "P   \r");
}

#[test]
fn display_matches_buffer() {
    let mut c = Canvas::new(3);
    c.draw("E", 2, true);
    assert_eq!(c.to_string(), "  E");
}
