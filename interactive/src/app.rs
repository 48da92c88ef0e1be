use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, NotCurrentGlContextSurfaceAccessor,
    PossiblyCurrentContext, Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, WindowSurface};

use glutin_winit::DisplayBuilder;

use raw_window_handle::HasRawWindowHandle;

use std::ffi::CString;
use std::num::NonZeroU32;

use cgmath::{Matrix4, Vector3};

use thiserror::Error;

use winit::dpi::{PhysicalSize, Size};
use winit::event::{ElementState, Event, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

use dvdlogo::animation::Animation;
use dvdlogo::clock::FrameClock;

use dvdlogo_common::animation_loader::AnimationLoader;

use gl_wrapper::geometry::{GeometryBuilder, VertexAttribute};
use gl_wrapper::program::ProgramBuilder;
use gl_wrapper::renderer::GlRenderer;
use gl_wrapper::texture::{Texture2D, TextureFilter};
use gl_wrapper::{QUAD, QUAD_INDICES};

use crate::logo::Logo;

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

pub struct App {
    event_loop: EventLoop<()>,
    gl_context: PossiblyCurrentContext,
    gl_window: GlWindow,
    animation: Animation,
    logo: Logo,
}

impl App {
    pub fn new(animation: Animation, logo: Logo) -> Result<Self, AppError> {
        let event_loop = EventLoop::new();
        let window_builder = WindowBuilder::new()
            .with_inner_size(Size::Physical(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT)))
            .with_min_inner_size(Size::Physical(PhysicalSize::new(32, 32)))
            .with_title("DVD-animation Window");
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));
        let template = ConfigTemplateBuilder::new();

        let (window, gl_config) = display_builder
            .build(&event_loop, template, |mut configs| configs.next().unwrap())
            .unwrap();

        let handle = window.as_ref().map(|w| w.raw_window_handle());
        let gl_display = gl_config.display();

        let context_attr = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .build(handle);

        let gl_window = GlWindow::new(window.unwrap(), &gl_config);

        let gl_context = unsafe {
            gl_display
                .create_context(&gl_config, &context_attr)
                .unwrap()
        }
        .make_current(&gl_window.surface)
        .unwrap();

        gl::load_with(|s| {
            gl_display
                .get_proc_address(CString::new(s).unwrap().as_c_str())
                .cast()
        });

        let app = Self {
            event_loop,
            gl_context,
            gl_window,
            animation,
            logo,
        };

        Ok(app)
    }

    pub fn run(mut self) -> ! {
        let quad = GeometryBuilder::new(&QUAD)
            .with_attribute(VertexAttribute::Vec2)
            .with_attribute(VertexAttribute::Vec2)
            .with_indices(&QUAD_INDICES)
            .build()
            .unwrap();

        let program = ProgramBuilder::new(
            include_str!("gl_shaders/sprite.glsl"),
            include_str!("gl_shaders/textured.glsl"),
        )
        .build()
        .unwrap();

        let texture = Texture2D::new(
            self.logo.width,
            self.logo.height,
            &self.logo.data,
            self.logo.format,
            TextureFilter::Linear,
        )
        .unwrap();

        let model_loc = program.uniform_location("model").unwrap();
        let sampler_loc = program.uniform_location("texture1").unwrap();
        program.set_int(sampler_loc, 0);

        unsafe {
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        let mut gl_renderer = GlRenderer::new();
        let mut clock = FrameClock::default();

        self.event_loop
            .run(move |event, _window_target, control_flow| {
                *control_flow = ControlFlow::Poll;
                match event {
                    Event::MainEventsCleared => {
                        let delta = clock.tick();

                        self.animation.advance(delta);

                        let position = self.animation.position();
                        let half_extent = self.animation.half_extent();

                        let model = Matrix4::from_translation(Vector3::new(
                            position.x, position.y, 0.0,
                        )) * Matrix4::from_nonuniform_scale(
                            half_extent.x,
                            half_extent.y,
                            1.0,
                        );

                        program.set_mat4(model_loc, &model);

                        self.gl_window.window.request_redraw();
                    }
                    Event::WindowEvent { event, .. } => match event {
                        WindowEvent::Resized(size) => {
                            if size.width != 0 && size.height != 0 {
                                self.gl_window.surface.resize(
                                    &self.gl_context,
                                    NonZeroU32::new(size.width).unwrap(),
                                    NonZeroU32::new(size.height).unwrap(),
                                );
                                gl_renderer.resize(size.width, size.height);
                            }
                        }
                        WindowEvent::KeyboardInput { input, .. } => match input.virtual_keycode {
                            Some(VirtualKeyCode::Escape) => {
                                if input.state == ElementState::Pressed {
                                    control_flow.set_exit();
                                }
                            }
                            Some(VirtualKeyCode::Space) => {
                                if input.state == ElementState::Pressed {
                                    self.animation.toggle_paused();
                                }
                            }
                            _ => {}
                        },
                        WindowEvent::DroppedFile(path) => {
                            match AnimationLoader::load_from_path(&path) {
                                Ok(a) => {
                                    eprintln!("Read animation description from {:?}", path);
                                    self.animation = a;
                                }
                                Err(e) => {
                                    eprintln!("Could not read animation description: {e}");
                                }
                            }
                        }
                        WindowEvent::CloseRequested => control_flow.set_exit(),
                        _ => (),
                    },
                    Event::RedrawRequested(_) => {
                        gl_renderer.clear_color(0.3, 0.3, 0.9);

                        texture.bind(0);
                        gl_renderer.draw(&quad, &program);

                        self.gl_window
                            .surface
                            .swap_buffers(&self.gl_context)
                            .unwrap();
                    }
                    _ => (),
                }
            })
    }
}

pub struct GlWindow {
    // XXX the surface must be dropped before the window.
    pub surface: Surface<WindowSurface>,
    pub window: Window,
}

impl GlWindow {
    pub fn new(window: Window, config: &Config) -> Self {
        let (width, height): (u32, u32) = window.inner_size().into();
        let raw_window_handle = window.raw_window_handle();
        let attrs = SurfaceAttributesBuilder::<WindowSurface>::new().build(
            raw_window_handle,
            NonZeroU32::new(width).unwrap(),
            NonZeroU32::new(height).unwrap(),
        );

        let surface = unsafe {
            config
                .display()
                .create_window_surface(config, &attrs)
                .unwrap()
        };

        Self { window, surface }
    }
}

#[derive(Debug, Error)]
pub enum AppError {}
