use std::ops::Range;

use crate::canvas::{DrawCmd, ResolvedFrame};
use crate::paint::Color;

use super::common::{LineVertex, PointInstance};

/// One draw call, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Batch {
    /// Instance range into `FrameBatches::points`.
    Points(Range<u32>),
    /// Vertex range into `FrameBatches::lines`.
    LineStrip(Range<u32>),
}

/// A resolved frame flattened into upload-ready GPU data.
#[derive(Debug, Default)]
pub(super) struct FrameBatches {
    pub clear: Color,
    pub points: Vec<PointInstance>,
    pub lines: Vec<LineVertex>,
    pub order: Vec<Batch>,
}

impl FrameBatches {
    /// `target_size` is in physical pixels; it converts pixel sizes to clip
    /// extents.
    ///
    /// A frame that never cleared still starts from black: swapchain images
    /// keep no contents between frames.
    pub(super) fn build(frame: &ResolvedFrame<'_>, target_size: [f32; 2]) -> Self {
        let [tw, th] = [target_size[0].max(1.0), target_size[1].max(1.0)];
        let mut out = FrameBatches {
            clear: frame.clear.unwrap_or(Color::BLACK),
            ..Default::default()
        };

        for draw in &frame.draws {
            match draw.cmd {
                DrawCmd::Points(cmd) => {
                    // Clip space spans 2 units per axis.
                    let half_extent = [cmd.size.max(0.0) / tw, cmd.size.max(0.0) / th];
                    let start = out.points.len() as u32;
                    out.points.extend(cmd.vertices.iter().map(|v| {
                        let c = draw.projection.to_clip(v.pos);
                        PointInstance {
                            center: [c.x, c.y],
                            half_extent,
                            color: v.color.to_array(),
                        }
                    }));
                    out.order.push(Batch::Points(start..out.points.len() as u32));
                }
                DrawCmd::LineStrip(cmd) => {
                    // A strip needs two vertices to produce a segment.
                    if cmd.vertices.len() < 2 {
                        continue;
                    }
                    let start = out.lines.len() as u32;
                    out.lines.extend(cmd.vertices.iter().map(|v| {
                        let c = draw.projection.to_clip(v.pos);
                        LineVertex {
                            position: [c.x, c.y],
                            color: v.color.to_array(),
                        }
                    }));
                    out.order.push(Batch::LineStrip(start..out.lines.len() as u32));
                }
                DrawCmd::SetProjection(_) | DrawCmd::Clear(_) => {}
            }
        }

        out
    }
}
