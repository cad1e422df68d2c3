use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::debug;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use std::time::Duration;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    width: u32,
    height: u32,
    current_frame: Option<PixelBuffer>,
    last_presented_generation: u64,
    last_error_message: Option<String>,
    last_render_duration: Option<Duration>,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let mut presenter = Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            width: size.width,
            height: size.height,
            current_frame: None,
            last_presented_generation: 0,
            last_error_message: None,
            last_render_duration: None,
        };
        presenter.draw_placeholder();

        Ok(presenter)
    }

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            // The fractal framebuffer first, egui on top.
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.width, self.height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)?;

        // The old frame no longer matches the surface.
        self.current_frame = None;
        self.draw_placeholder();

        Ok(())
    }

    fn poll_frame(&mut self) -> bool {
        let Some(event) = self.adapter.render_event() else {
            return false;
        };

        match event {
            RenderEvent::Frame(frame) => {
                let size = frame.pixel_buffer.size();

                if frame.generation <= self.last_presented_generation
                    || size.width != self.width
                    || size.height != self.height
                {
                    debug!(
                        "skipping frame {} ({}x{}) for {}x{} surface",
                        frame.generation, size.width, size.height, self.width, self.height
                    );
                    return false;
                }

                self.copy_pixel_buffer_into_pixels_frame(&frame);
                self.last_presented_generation = frame.generation;
                self.last_render_duration = Some(frame.render_duration);
                self.last_error_message = None;
                self.current_frame = Some(frame.pixel_buffer);

                true
            }
            RenderEvent::Error(error) => {
                if error.generation >= self.last_presented_generation {
                    self.last_error_message = Some(error.message);
                    return true;
                }

                false
            }
        }
    }

    fn current_frame(&self) -> Option<&PixelBuffer> {
        self.current_frame.as_ref()
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }
}

impl PixelsPresenter {
    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    fn copy_pixel_buffer_into_pixels_frame(&mut self, frame: &FrameData) {
        let src = frame.pixel_buffer.buffer();
        let dest = self.pixels.frame_mut();

        if dest.len() == src.len() {
            dest.copy_from_slice(src);
        }
    }
}
