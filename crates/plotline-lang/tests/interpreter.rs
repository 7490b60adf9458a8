//! Interpreter behavior tests.
//!
//! Tests the full stack: program text → parse → dispatch → Recorder canvas.
//! Pen state is inspected through the interpreter accessors; drawing is
//! inspected through the recorded commands.

use plotline_lang::{
    Color, DrawCommand, ErrorCode, ErrorKind, ExecutionError, Interpreter, InterpreterState,
    Point, Recorder, Rect, SyntaxError, CommandKind, check_syntax, run_recorded,
};

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn interp() -> Interpreter<Recorder> {
    Interpreter::new(Recorder::new())
}

fn run(src: &str) -> Interpreter<Recorder> {
    let mut it = interp();
    it.execute(src).unwrap_or_else(|e| panic!("execute failed: {e}"));
    it
}

fn run_err(src: &str) -> (Interpreter<Recorder>, ExecutionError) {
    let mut it = interp();
    match it.execute(src) {
        Ok(()) => panic!("expected execute to fail but it succeeded"),
        Err(e) => (it, e),
    }
}

fn cmds(it: &Interpreter<Recorder>) -> &[DrawCommand] {
    it.canvas().commands()
}

fn pt(x: f64, y: f64) -> Point { Point::new(x, y) }

// ─── Cursor movement ─────────────────────────────────────────────────────────

#[test]
fn moveto_sets_cursor_without_drawing() {
    let it = run("moveto 100 100");
    assert_eq!(it.cursor(), pt(100.0, 100.0));
    assert!(cmds(&it).is_empty());
}

#[test]
fn moveto_keeps_exact_values() {
    let it = run("moveto -12.125 3.5e2");
    assert_eq!(it.cursor(), pt(-12.125, 350.0));
}

#[test]
fn drawto_draws_from_old_cursor_then_moves() {
    let it = run("moveto 10 10\ndrawto 20 20");
    assert_eq!(it.cursor(), pt(20.0, 20.0));
    assert_eq!(cmds(&it), &[DrawCommand::Line { from: pt(10.0, 10.0), to: pt(20.0, 20.0), color: Color::BLACK }]);
}

#[test]
fn drawto_from_default_cursor_starts_at_origin() {
    let it = run("drawto 5 5");
    assert!(matches!(cmds(&it)[0], DrawCommand::Line { from, .. } if from == Point::ORIGIN));
}

#[test]
fn drawto_chain_forms_polyline() {
    let it = run("moveto 0 0\ndrawto 10 0\ndrawto 10 10\ndrawto 0 10");
    let froms: Vec<Point> = cmds(&it).iter().map(|c| match c {
        DrawCommand::Line { from, .. } => *from,
        other => panic!("expected line, got {other:?}"),
    }).collect();
    assert_eq!(froms, vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0)]);
    assert_eq!(it.cursor(), pt(0.0, 10.0));
}

// ─── Clear ───────────────────────────────────────────────────────────────────

#[test]
fn clear_issues_one_call_and_keeps_state() {
    let it = run("moveto 7 8\ncolor red\nfill on\nclear");
    assert_eq!(cmds(&it), &[DrawCommand::Clear]);
    assert_eq!(it.cursor(), pt(7.0, 8.0));
    assert_eq!(it.pen(), Color::from_name("red").unwrap());
    assert!(it.fill_enabled());
}

#[test]
fn clear_hides_earlier_drawing() {
    let it = run("circle 5\nclear\nrectangle 0 0 1 1");
    assert_eq!(it.canvas().visible().len(), 1);
    assert_eq!(it.canvas().commands().len(), 3);
}

// ─── Shapes ──────────────────────────────────────────────────────────────────

#[test]
fn rectangle_does_not_move_cursor() {
    let it = run("moveto 1 2\nrectangle 10 20 30 40");
    assert_eq!(it.cursor(), pt(1.0, 2.0));
    assert_eq!(cmds(&it), &[DrawCommand::Rectangle {
        rect: Rect::new(10.0, 20.0, 30.0, 40.0), color: Color::BLACK, filled: false,
    }]);
}

#[test]
fn circle_is_centered_on_cursor() {
    let it = run("moveto 50 60\ncircle 20");
    assert_eq!(cmds(&it), &[DrawCommand::Ellipse {
        bounds: Rect::new(30.0, 40.0, 40.0, 40.0), color: Color::BLACK, filled: false,
    }]);
    assert_eq!(it.cursor(), pt(50.0, 60.0));
}

#[test]
fn circle_at_default_cursor() {
    let it = run("circle 20");
    assert!(matches!(&cmds(&it)[0], DrawCommand::Ellipse { bounds, .. } if *bounds == Rect::new(-20.0, -20.0, 40.0, 40.0)));
}

#[test]
fn triangle_passes_three_vertices_in_order() {
    let it = run("triangle 10 10 50 10 30 40");
    assert_eq!(cmds(&it), &[DrawCommand::Polygon {
        points: vec![pt(10.0, 10.0), pt(50.0, 10.0), pt(30.0, 40.0)],
        color: Color::BLACK,
        filled: false,
    }]);
    assert_eq!(it.cursor(), Point::ORIGIN);
}

// ─── Pen color ───────────────────────────────────────────────────────────────

#[test]
fn color_sets_pen_case_insensitively() {
    let it = run("color Red");
    assert_eq!(it.pen(), Color::new(255, 0, 0));
}

#[test]
fn color_applies_to_later_draws_only() {
    let it = run("drawto 1 1\ncolor blue\ndrawto 2 2");
    let colors: Vec<Color> = cmds(&it).iter().filter_map(DrawCommand::color).collect();
    assert_eq!(colors, vec![Color::BLACK, Color::new(0, 0, 255)]);
}

#[test]
fn unknown_color_is_runtime_error() {
    let (it, err) = run_err("circle 1\ncolor chartreuse\ncircle 2");
    assert_eq!(err.line, 2);
    assert_eq!(err.kind, ErrorKind::UnknownColor { name: "chartreuse".into() });
    assert_eq!(err.code(), ErrorCode::R001);
    assert!(err.syntax().is_none());
    assert_eq!(it.pen(), Color::BLACK);
    assert_eq!(cmds(&it).len(), 1);
}

// ─── Fill ────────────────────────────────────────────────────────────────────

#[test]
fn fill_toggles_flag() {
    let mut it = interp();
    it.execute("fill on").unwrap();
    assert!(it.fill_enabled());
    it.execute_one("fill off").unwrap();
    assert!(!it.fill_enabled());
}

#[test]
fn fill_is_sticky_and_positional() {
    let it = run("fill on\nrectangle 0 0 50 30\ncircle 4\nfill off\nrectangle 0 0 50 30");
    let filled: Vec<bool> = cmds(&it).iter().map(DrawCommand::is_filled).collect();
    assert_eq!(filled, vec![true, true, false]);
}

#[test]
fn fill_does_not_affect_lines() {
    let it = run("fill on\ndrawto 3 3");
    assert!(matches!(cmds(&it)[0], DrawCommand::Line { .. }));
    assert!(!cmds(&it)[0].is_filled());
}

#[test]
fn filled_triangle_uses_current_pen() {
    let it = run("color green\nfill on\ntriangle 0 0 1 0 0 1");
    assert!(matches!(&cmds(&it)[0], DrawCommand::Polygon { filled: true, color, .. } if *color == Color::new(0, 128, 0)));
}

// ─── Fail-fast execution ─────────────────────────────────────────────────────

#[test]
fn unknown_command_halts_before_later_lines() {
    let (it, err) = run_err("moveto 1 1\nfoo 1 2\ndrawto 5 5");
    assert_eq!(err.line, 2);
    assert_eq!(err.syntax(), Some(&SyntaxError::UnknownCommand { name: "foo".into() }));
    assert!(cmds(&it).is_empty());
    assert_eq!(it.cursor(), pt(1.0, 1.0));
}

#[test]
fn earlier_draws_are_not_rolled_back() {
    let (it, _) = run_err("drawto 1 1\nrectangle 50 30\ndrawto 2 2");
    assert_eq!(cmds(&it).len(), 1);
}

#[test]
fn arity_error_reports_expected_and_found() {
    let (_, err) = run_err("rectangle 50 30");
    assert_eq!(err.kind, ErrorKind::Syntax(SyntaxError::ArityMismatch {
        command: CommandKind::Rectangle, expected: 4, found: 2,
    }));
    assert_eq!(err.to_string(), "[P002] line 1 — `rectangle` expects 4 argument(s), got 2");
}

#[test]
fn error_line_counts_blank_lines() {
    let (_, err) = run_err("clear\n\n\ncircle big");
    assert_eq!(err.line, 4);
    assert_eq!(err.code(), ErrorCode::P003);
}

#[test]
fn blank_program_does_nothing() {
    let it = run("\n   \n\t\n");
    assert!(cmds(&it).is_empty());
    assert_eq!(it.state(), &InterpreterState::default());
}

// ─── State lifecycle ─────────────────────────────────────────────────────────

#[test]
fn execute_starts_from_fresh_state() {
    let mut it = interp();
    it.execute("moveto 9 9\ncolor red\nfill on").unwrap();
    it.execute("circle 1").unwrap();
    assert_eq!(cmds(&it).last(), Some(&DrawCommand::Ellipse {
        bounds: Rect::new(-1.0, -1.0, 2.0, 2.0), color: Color::BLACK, filled: false,
    }));
}

#[test]
fn execute_one_keeps_state_between_calls() {
    let mut it = interp();
    it.execute_one("moveto 10 10").unwrap();
    it.execute_one("color blue").unwrap();
    it.execute_one("drawto 20 20").unwrap();
    assert_eq!(cmds(&it), &[DrawCommand::Line {
        from: pt(10.0, 10.0), to: pt(20.0, 20.0), color: Color::new(0, 0, 255),
    }]);
}

#[test]
fn execute_one_error_leaves_state_intact() {
    let mut it = interp();
    it.execute_one("moveto 3 4").unwrap();
    let err = it.execute_one("moveto x y").unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(it.cursor(), pt(3.0, 4.0));
}

#[test]
fn execute_one_ignores_blank_input() {
    let mut it = interp();
    assert!(it.execute_one("   ").is_ok());
    assert!(cmds(&it).is_empty());
}

#[test]
fn seeded_state_is_used_by_execute_one() {
    let state = InterpreterState { cursor: pt(5.0, 5.0), pen: Color::WHITE, fill: true };
    let mut it = interp().with_state(state);
    it.execute_one("circle 1").unwrap();
    assert_eq!(cmds(&it), &[DrawCommand::Ellipse {
        bounds: Rect::new(4.0, 4.0, 2.0, 2.0), color: Color::WHITE, filled: true,
    }]);
}

#[test]
fn reset_restores_defaults_but_keeps_canvas() {
    let mut it = run("moveto 2 2\nfill on\ncircle 1");
    it.reset();
    assert_eq!(it.state(), &InterpreterState::default());
    assert_eq!(cmds(&it).len(), 1);
}

// ─── Syntax check vs execute ─────────────────────────────────────────────────

#[test]
fn syntax_check_touches_no_canvas() {
    let src = "moveto 1 1\ndrawto 2 2\ncircle 3\nnope\nfill on\nclear";
    let report = check_syntax(src);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].line, 4);

    // executing the same program stops at the same line
    let (rec, result) = run_recorded(src);
    assert_eq!(result.unwrap_err().line, 4);
    assert_eq!(rec.len(), 2);
}

#[test]
fn non_ascii_whitespace_program_checks_and_runs() {
    let src = "moveto\u{a0}10 10\ndrawto 20\x0c20\n\u{3000}\nclear";
    assert!(check_syntax(src).is_valid());

    let it = run(src);
    assert_eq!(it.cursor(), pt(20.0, 20.0));
    assert_eq!(cmds(&it), &[
        DrawCommand::Line { from: pt(10.0, 10.0), to: pt(20.0, 20.0), color: Color::BLACK },
        DrawCommand::Clear,
    ]);
}

#[test]
fn run_recorded_returns_canvas_on_success() {
    let (rec, result) = run_recorded("moveto 10 10\ndrawto 20 20");
    assert!(result.is_ok());
    assert_eq!(rec.len(), 1);
}

// ─── Canvas ownership ────────────────────────────────────────────────────────

#[test]
fn borrowed_canvas_outlives_interpreter() {
    let mut rec = Recorder::new();
    {
        let mut it = Interpreter::new(&mut rec);
        it.execute("circle 2\ndrawto 1 1").unwrap();
    }
    assert_eq!(rec.len(), 2);
}

#[test]
fn canvas_is_dropped_with_interpreter() {
    use std::rc::Rc;
    use std::cell::Cell;

    struct Counting { drops: Rc<Cell<usize>> }

    impl Drop for Counting {
        fn drop(&mut self) { self.drops.set(self.drops.get() + 1); }
    }

    impl plotline_lang::Canvas for Counting {
        fn draw_line(&mut self, _: Point, _: Point, _: Color) {}
        fn draw_rectangle(&mut self, _: Rect, _: Color, _: bool) {}
        fn draw_ellipse(&mut self, _: Rect, _: Color, _: bool) {}
        fn draw_polygon(&mut self, _: &[Point], _: Color, _: bool) {}
        fn clear(&mut self) {}
    }

    let drops = Rc::new(Cell::new(0));
    {
        let mut it = Interpreter::new(Counting { drops: drops.clone() });
        assert!(it.execute("circle 1\nfoo").is_err());
    }
    assert_eq!(drops.get(), 1);
}
