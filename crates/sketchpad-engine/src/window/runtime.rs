use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::canvas::DrawList;
use crate::coords::Viewport;
use crate::core::{FrameCtx, Scene, SceneConfig};
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::render::primitives::PrimitiveRenderer;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::{FrameClock, FrameTime};

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window described by `config` and drives `scene` until the
    /// window is closed.
    ///
    /// Returns `Ok(())` after a close request. Any failure to create the event
    /// loop, window or GPU context, and an unrecoverable surface error, is
    /// returned as an error; there is no degraded mode.
    pub fn run<S>(config: SceneConfig, gpu_init: GpuInit, scene: S) -> Result<()>
    where
        S: Scene + 'static,
    {
        config.validate().context("invalid scene configuration")?;

        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = RuntimeState::new(config, gpu_init, scene);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
    canvas: DrawList,
    renderer: PrimitiveRenderer,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct RuntimeState<S>
where
    S: Scene + 'static,
{
    config: SceneConfig,
    gpu_init: GpuInit,
    scene: S,

    entry: Option<WindowEntry>,
    setup_done: bool,
    fatal: Option<anyhow::Error>,
}

impl<S> RuntimeState<S>
where
    S: Scene + 'static,
{
    fn new(config: SceneConfig, gpu_init: GpuInit, scene: S) -> Self {
        Self {
            config,
            gpu_init,
            scene,
            entry: None,
            setup_done: false,
            fatal: None,
        }
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::with_max_fps(self.config.max_fps),
            canvas: DrawList::new(),
            renderer: PrimitiveRenderer::new(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init)).context("GPU initialization failed")
            },
        }
        .try_build()?;

        log::info!(
            "window '{}' created ({}x{}, max {} fps)",
            self.config.title,
            self.config.width,
            self.config.height,
            self.config.max_fps
        );

        Ok(entry)
    }

    /// Records a fatal error and tears the window down.
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.fatal = Some(err);
        self.entry = None;
        event_loop.exit();
    }

    /// Runs one iteration: step the scene, present, update the title.
    fn run_frame(&mut self) -> Result<()> {
        let Some(entry) = self.entry.as_mut() else {
            return Ok(());
        };
        let (scene, config) = (&mut self.scene, &self.config);

        entry.with_mut(|fields| {
            let time = step_frame(
                scene,
                fields.input_state,
                fields.input_frame,
                fields.clock,
                fields.canvas,
                logical_viewport(fields.window),
            );

            let presented = present(fields.gpu, fields.window, fields.renderer, fields.canvas);

            fields.window.set_title(&config.title_with_fps(time.fps));
            presented
        })
    }
}

/// Advances `scene` by one frame without touching the window or GPU.
///
/// Ticks the clock, runs `handle_input` and `update` against this frame's
/// batch, clears the batch, then starts a new canvas frame and records
/// `render`. The caller presents `canvas` and updates the title.
fn step_frame<S>(
    scene: &mut S,
    input_state: &InputState,
    input_frame: &mut InputFrame,
    clock: &mut FrameClock,
    canvas: &mut DrawList,
    viewport: Viewport,
) -> FrameTime
where
    S: Scene + ?Sized,
{
    let time = clock.tick();

    {
        let ctx = FrameCtx {
            input_frame: &*input_frame,
            input: input_state,
            time,
            viewport,
        };
        scene.handle_input(&ctx);
        scene.update(&ctx);
    }
    input_frame.clear();

    canvas.begin_frame();
    scene.render(canvas);

    time
}

impl<S> ApplicationHandler for RuntimeState<S>
where
    S: Scene + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        let mut entry = match self.create_window_entry(event_loop) {
            Ok(entry) => entry,
            Err(err) => {
                self.fail(event_loop, err.context("failed to create initial window"));
                return;
            }
        };

        if !self.setup_done {
            let scene = &mut self.scene;
            entry.with_canvas_mut(|canvas| scene.setup(canvas));
            self.setup_done = true;
        }

        entry.borrow_window().request_redraw();
        self.entry = Some(entry);
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(entry) = &self.entry else {
            return;
        };

        // Sleep in the event loop until the next frame is due; the clock
        // only sleeps itself when a redraw arrives early.
        match entry.borrow_clock().next_deadline() {
            Some(deadline) if Instant::now() < deadline => {
                event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
            }
            _ => {
                event_loop.set_control_flow(ControlFlow::Wait);
                entry.borrow_window().request_redraw();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };
        if entry.borrow_window().id() != window_id {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested; shutting down");
                // Drops the surface, device and window.
                self.entry = None;
                event_loop.exit();
            }

            WindowEvent::Resized(new_size) => {
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.borrow_window().inner_size();
                entry.with_gpu_mut(|gpu| gpu.resize(new_size));
            }

            WindowEvent::RedrawRequested => {
                if let Err(err) = self.run_frame() {
                    self.fail(event_loop, err);
                }
            }

            other => {
                entry.with_mut(|fields| {
                    if let Some(ev) = translate_window_event(fields.window, fields.input_state, &other) {
                        fields.input_state.apply_event(fields.input_frame, ev);
                    }
                });
            }
        }
    }
}

fn logical_viewport(window: &Window) -> Viewport {
    let logical: LogicalSize<f64> = window.inner_size().to_logical(window.scale_factor());
    Viewport::new(logical.width as f32, logical.height as f32)
}

fn present(
    gpu: &mut Gpu<'_>,
    window: &Window,
    renderer: &mut PrimitiveRenderer,
    canvas: &DrawList,
) -> Result<()> {
    let size = gpu.size();
    if size.width == 0 || size.height == 0 {
        return Ok(());
    }

    let mut frame = match gpu.begin_frame() {
        Ok(frame) => frame,
        Err(err) => {
            return match gpu.handle_surface_error(err) {
                SurfaceErrorAction::Fatal => Err(anyhow!("GPU surface became unusable")),
                SurfaceErrorAction::Reconfigure | SurfaceErrorAction::SkipFrame => Ok(()),
            };
        }
    };

    {
        let rctx = RenderCtx::new(
            gpu.device(),
            gpu.queue(),
            gpu.surface_format(),
            [size.width as f32, size.height as f32],
        );
        let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
        renderer.render(&rctx, &mut target, canvas);
    }

    window.pre_present_notify();
    gpu.submit(frame);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, DrawCmd};
    use crate::coords::{Ortho2d, Vec2};
    use crate::draw;
    use crate::input::{InputEvent, MouseButton, MouseButtonState, PointerButtonEvent};

    const PLOT: Ortho2d = Ortho2d::new(0.0, 15.0, 1.5, -1.5);

    /// Records hook calls and every primary press it is handed.
    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
        presses: Vec<(f32, f32)>,
    }

    impl Scene for Recorder {
        fn setup(&mut self, canvas: &mut dyn Canvas) {
            self.calls.push("setup");
            draw::init_ortho(canvas, PLOT.left, PLOT.right, PLOT.top, PLOT.bottom);
        }

        fn handle_input(&mut self, ctx: &FrameCtx<'_>) {
            self.calls.push("handle_input");
            self.presses
                .extend(ctx.input_frame.presses(MouseButton::PRIMARY).map(|p| (p.x, p.y)));
        }

        fn update(&mut self, _ctx: &FrameCtx<'_>) {
            self.calls.push("update");
        }

        fn render(&mut self, canvas: &mut dyn Canvas) {
            self.calls.push("render");
            draw::prepare_render(canvas);
            draw::draw_point(canvas, Vec2::new(1.0, 0.0), 5.0);
        }
    }

    struct Harness {
        scene: Recorder,
        input_state: InputState,
        input_frame: InputFrame,
        clock: FrameClock,
        canvas: DrawList,
    }

    impl Harness {
        fn new() -> Self {
            let mut h = Self {
                scene: Recorder::default(),
                input_state: InputState::default(),
                input_frame: InputFrame::default(),
                clock: FrameClock::new(),
                canvas: DrawList::new(),
            };
            h.scene.setup(&mut h.canvas);
            h
        }

        fn click(&mut self, x: f32, y: f32) {
            let ev = InputEvent::PointerButton(PointerButtonEvent {
                button: MouseButton::Left,
                state: MouseButtonState::Pressed,
                x,
                y,
            });
            self.input_state.apply_event(&mut self.input_frame, ev);
        }

        fn step(&mut self) -> FrameTime {
            step_frame(
                &mut self.scene,
                &self.input_state,
                &mut self.input_frame,
                &mut self.clock,
                &mut self.canvas,
                Viewport::new(900.0, 600.0),
            )
        }
    }

    // ── hook order ────────────────────────────────────────────────────────

    #[test]
    fn hooks_run_in_order_every_frame() {
        let mut h = Harness::new();
        h.step();
        h.step();

        assert_eq!(
            h.scene.calls,
            vec!["setup", "handle_input", "update", "render", "handle_input", "update", "render"]
        );
    }

    #[test]
    fn frames_advance_the_clock() {
        let mut h = Harness::new();
        let first = h.step();
        let second = h.step();

        assert_eq!((first.frame_index, second.frame_index), (0, 1));
    }

    // ── input batch ───────────────────────────────────────────────────────

    #[test]
    fn press_is_delivered_exactly_once() {
        let mut h = Harness::new();
        h.click(450.0, 300.0);

        h.step();
        assert_eq!(h.scene.presses, vec![(450.0, 300.0)]);
        assert!(h.input_frame.is_empty());

        h.step();
        assert_eq!(h.scene.presses, vec![(450.0, 300.0)]);
    }

    #[test]
    fn presses_between_frames_land_in_the_next_frame() {
        let mut h = Harness::new();
        h.click(0.0, 0.0);
        h.step();
        h.click(900.0, 600.0);
        h.click(10.0, 20.0);
        h.step();
        h.step();

        assert_eq!(h.scene.presses, vec![(0.0, 0.0), (900.0, 600.0), (10.0, 20.0)]);
    }

    // ── canvas ────────────────────────────────────────────────────────────

    #[test]
    fn setup_projection_survives_frames() {
        let mut h = Harness::new();
        h.step();
        h.step();

        assert_eq!(h.canvas.projection(), PLOT);
        let frame = h.canvas.resolve();
        assert_eq!(frame.draws.len(), 1);
        assert_eq!(frame.draws[0].projection, PLOT);
    }

    #[test]
    fn canvas_holds_only_the_latest_frame() {
        let mut h = Harness::new();
        h.step();
        h.step();

        let kinds: Vec<bool> = h
            .canvas
            .commands()
            .iter()
            .map(|c| matches!(c, DrawCmd::Clear(_)))
            .collect();
        assert_eq!(kinds, vec![true, false]);
    }
}
