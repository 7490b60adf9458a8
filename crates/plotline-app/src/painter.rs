//! Paints recorded draw commands onto an egui canvas area.

use eframe::egui::{self, Color32, Pos2, Rect, Stroke};
use plotline_lang::{Color, DrawCommand, Point};

const ELLIPSE_SEGMENTS: usize = 64;
const PEN_WIDTH: f32 = 1.5;

pub fn color32(c: Color) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// Paint `commands` into `area`. Canvas (0,0) is the top-left corner of `area`,
/// y grows downward. Everything outside `area` is clipped.
pub fn paint(ui: &egui::Ui, area: Rect, background: Color, commands: &[DrawCommand]) {
    let painter = ui.painter_at(area);
    painter.rect_filled(area, 0.0, color32(background));

    let offset = area.min;
    let to_screen = |p: &Point| egui::pos2(offset.x + p.x as f32, offset.y + p.y as f32);

    for cmd in commands {
        let Some(color) = cmd.color() else { continue };
        let stroke = Stroke::new(PEN_WIDTH, color32(color));
        let pts: Vec<Pos2> = cmd.outline(ELLIPSE_SEGMENTS).iter().map(to_screen).collect();

        match cmd {
            DrawCommand::Line { .. } => {
                if let &[a, b] = pts.as_slice() {
                    painter.line_segment([a, b], stroke);
                }
            }
            _ if pts.len() < 3 => {}
            _ if cmd.is_filled() => {
                painter.add(egui::Shape::convex_polygon(pts, color32(color), stroke));
            }
            _ => {
                painter.add(egui::Shape::closed_line(pts, stroke));
            }
        }
    }
}
