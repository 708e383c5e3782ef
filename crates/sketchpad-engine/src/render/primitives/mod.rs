//! Point and line-strip rendering.
//!
//! `PrimitiveRenderer` replays a `DrawList` inside a single render pass so
//! points and line strips interleave exactly in recording order.

mod batch;
mod common;

use wgpu::util::DeviceExt;

use crate::canvas::DrawList;
use crate::render::{RenderCtx, RenderTarget};

use batch::{Batch, FrameBatches};
use common::{
    create_pipeline, DynamicBuffer, LineVertex, PointInstance, QuadVertex, QUAD_INDICES,
    QUAD_VERTICES,
};

/// Renderer for `DrawCmd::Points` and `DrawCmd::LineStrip`.
///
/// Points are screen-aligned squares `size` pixels wide. Line strips use the
/// native line topology and are always one pixel wide; wider strips log once
/// and fall back to one pixel.
#[derive(Default)]
pub struct PrimitiveRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    point_pipeline: Option<wgpu::RenderPipeline>,
    line_pipeline: Option<wgpu::RenderPipeline>,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,

    point_instances: DynamicBuffer,
    line_vertices: DynamicBuffer,

    warned_wide_lines: bool,
}

impl PrimitiveRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the target and draws everything visible in `draw_list`.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &DrawList,
    ) {
        let resolved = draw_list.resolve();
        self.warn_wide_lines(&resolved);
        let batches = FrameBatches::build(&resolved, ctx.target_size);

        self.ensure_pipelines(ctx);
        self.ensure_static_buffers(ctx);

        self.point_instances
            .upload(ctx.device, ctx.queue, "sketchpad point instances", &batches.points);
        self.line_vertices
            .upload(ctx.device, ctx.queue, "sketchpad line vertices", &batches.lines);

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("sketchpad primitives pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(batches.clear.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        if batches.order.is_empty() {
            return;
        }

        let (Some(point_pipeline), Some(line_pipeline)) =
            (self.point_pipeline.as_ref(), self.line_pipeline.as_ref())
        else {
            return;
        };
        let (Some(quad_vbo), Some(quad_ibo)) = (self.quad_vbo.as_ref(), self.quad_ibo.as_ref())
        else {
            return;
        };

        for batch in &batches.order {
            match batch {
                Batch::Points(range) => {
                    let Some(instances) = self.point_instances.get() else { continue };
                    rpass.set_pipeline(point_pipeline);
                    rpass.set_vertex_buffer(0, quad_vbo.slice(..));
                    rpass.set_vertex_buffer(1, instances.slice(..));
                    rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
                    rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, range.clone());
                }
                Batch::LineStrip(range) => {
                    let Some(vertices) = self.line_vertices.get() else { continue };
                    rpass.set_pipeline(line_pipeline);
                    rpass.set_vertex_buffer(0, vertices.slice(..));
                    rpass.draw(range.clone(), 0..1);
                }
            }
        }
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.point_pipeline.is_some() {
            return;
        }

        self.point_pipeline = Some(create_pipeline(
            ctx.device,
            ctx.surface_format,
            "sketchpad point pipeline",
            include_str!("shaders/points.wgsl"),
            &[QuadVertex::layout(), PointInstance::layout()],
            wgpu::PrimitiveTopology::TriangleList,
        ));
        self.line_pipeline = Some(create_pipeline(
            ctx.device,
            ctx.surface_format,
            "sketchpad line strip pipeline",
            include_str!("shaders/line_strip.wgsl"),
            &[LineVertex::layout()],
            wgpu::PrimitiveTopology::LineStrip,
        ));
        self.pipeline_format = Some(ctx.surface_format);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sketchpad point quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("sketchpad point quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn warn_wide_lines(&mut self, frame: &crate::canvas::ResolvedFrame<'_>) {
        if self.warned_wide_lines {
            return;
        }
        let wide = frame.draws.iter().any(|d| {
            matches!(d.cmd, crate::canvas::DrawCmd::LineStrip(l) if l.width > 1.0)
        });
        if wide {
            log::debug!("line strips wider than 1px are drawn at 1px");
            self.warned_wide_lines = true;
        }
    }
}
