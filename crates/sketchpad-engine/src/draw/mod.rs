//! Stateless drawing helpers.
//!
//! Each helper takes the canvas explicitly and issues a fixed sequence of
//! calls on it. Inputs are assumed valid (finite coordinates, non-negative
//! sizes).

mod curve;

pub use curve::{sample_curve, GRAPH_DOMAIN, GRAPH_STEP};

use crate::canvas::{Canvas, Vertex};
use crate::coords::{Ortho2d, Vec2};
use crate::paint::Color;

/// Point size used by [`draw_points`].
pub const MARKER_SIZE: f32 = 5.0;

/// Point size used by [`draw_graph`].
pub const GRAPH_POINT_SIZE: f32 = 2.0;

/// Line width used by [`draw_lines`].
pub const LINE_WIDTH: f32 = 1.0;

/// Color used when a helper does not take one.
pub const DEFAULT_COLOR: Color = Color::WHITE;

/// Color of the sine curve in [`draw_graph`].
pub const SINE_COLOR: Color = Color::BLUE;

/// Color of the cosine curve in [`draw_graph`].
pub const COSINE_COLOR: Color = Color::GREEN;

/// Installs an orthographic projection.
///
/// `top` and `bottom` are the scene coordinates shown at the top and bottom
/// window edges. Bounds with zero width or height are ignored with a warning
/// and the previous projection stays in force.
pub fn init_ortho<C: Canvas + ?Sized>(canvas: &mut C, left: f32, right: f32, top: f32, bottom: f32) {
    canvas.set_projection(Ortho2d::new(left, right, top, bottom));
}

/// Starts a frame: clears to black.
pub fn prepare_render<C: Canvas + ?Sized>(canvas: &mut C) {
    canvas.clear(Color::BLACK);
}

/// Draws a single point `size` pixels wide.
pub fn draw_point<C: Canvas + ?Sized>(canvas: &mut C, pos: Vec2, size: f32) {
    canvas.draw_points(&[Vertex::new(pos, DEFAULT_COLOR)], size);
}

/// Draws `points` as discrete markers.
pub fn draw_points<C: Canvas + ?Sized>(canvas: &mut C, points: &[Vec2]) {
    canvas.draw_points(&with_color(points, DEFAULT_COLOR), MARKER_SIZE);
}

/// Draws `points` connected in order as one line strip.
pub fn draw_lines<C: Canvas + ?Sized>(canvas: &mut C, points: &[Vec2]) {
    canvas.draw_line_strip(&with_color(points, DEFAULT_COLOR), LINE_WIDTH);
}

/// Plots `sin` and `cos` over [`GRAPH_DOMAIN`] at [`GRAPH_STEP`].
///
/// Emits one point batch with a sine and a cosine sample per step,
/// interleaved: `sin(x0), cos(x0), sin(x1), cos(x1), ...`.
pub fn draw_graph<C: Canvas + ?Sized>(canvas: &mut C) {
    let (start, end) = GRAPH_DOMAIN;
    let sine = sample_curve(f64::sin, start, end, GRAPH_STEP);
    let cosine = sample_curve(f64::cos, start, end, GRAPH_STEP);

    let vertices: Vec<Vertex> = sine
        .into_iter()
        .zip(cosine)
        .flat_map(|(s, c)| [Vertex::new(s, SINE_COLOR), Vertex::new(c, COSINE_COLOR)])
        .collect();

    canvas.draw_points(&vertices, GRAPH_POINT_SIZE);
}

fn with_color(points: &[Vec2], color: Color) -> Vec<Vertex> {
    points.iter().map(|&p| Vertex::new(p, color)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCmd, DrawList};

    #[test]
    fn init_ortho_sets_projection() {
        let mut dl = DrawList::new();
        init_ortho(&mut dl, 0.0, 15.0, 1.5, -1.5);
        assert_eq!(dl.projection(), Ortho2d::new(0.0, 15.0, 1.5, -1.5));
    }

    #[test]
    fn prepare_render_clears_black() {
        let mut dl = DrawList::new();
        prepare_render(&mut dl);
        assert_eq!(dl.commands(), &[DrawCmd::Clear(Color::BLACK)]);
    }

    #[test]
    fn draw_point_uses_given_size() {
        let mut dl = DrawList::new();
        draw_point(&mut dl, Vec2::new(0.25, -0.5), 8.0);

        let DrawCmd::Points(p) = &dl.commands()[0] else {
            panic!("expected a point batch");
        };
        assert_eq!(p.size, 8.0);
        assert_eq!(p.vertices, vec![Vertex::new(Vec2::new(0.25, -0.5), DEFAULT_COLOR)]);
    }

    #[test]
    fn points_and_lines_share_vertices() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)];
        let mut dl = DrawList::new();
        draw_points(&mut dl, &pts);
        draw_lines(&mut dl, &pts);

        let [DrawCmd::Points(p), DrawCmd::LineStrip(l)] = dl.commands() else {
            panic!("unexpected commands: {:?}", dl.commands());
        };
        assert_eq!(p.size, MARKER_SIZE);
        assert_eq!(l.width, LINE_WIDTH);
        assert_eq!(p.vertices, l.vertices);
    }

    #[test]
    fn graph_is_one_batch_of_two_colors() {
        let mut dl = DrawList::new();
        draw_graph(&mut dl);

        let [DrawCmd::Points(p)] = dl.commands() else {
            panic!("expected one point batch");
        };
        assert_eq!(p.size, GRAPH_POINT_SIZE);
        assert_eq!(p.vertices.len(), 1200);

        let sine = p.vertices.iter().filter(|v| v.color == SINE_COLOR).count();
        let cosine = p.vertices.iter().filter(|v| v.color == COSINE_COLOR).count();
        assert_eq!((sine, cosine), (600, 600));
    }

    #[test]
    fn graph_samples_match_functions() {
        let mut dl = DrawList::new();
        draw_graph(&mut dl);
        let DrawCmd::Points(p) = &dl.commands()[0] else { unreachable!() };

        // Third step: x = 0.05.
        let s = p.vertices[4];
        let c = p.vertices[5];
        assert!((s.pos.x - 0.05).abs() < 1e-6);
        assert!((s.pos.y - 0.05f32.sin()).abs() < 1e-6);
        assert!((c.pos.y - 0.05f32.cos()).abs() < 1e-6);
    }
}
