use std::sync::Arc;
use std::time::Instant;

use cgmath::{Vector3, Zero};
use rand::{rngs::StdRng, SeedableRng};
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    error::EventLoopError,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    config::{OrreryConfig, WindowConfig},
    gfx::{
        camera::{CameraManager, OrbitCamera},
        frame::{Frame, PointVertex},
        geometry::SceneMeshes,
        renderer::Renderer,
        texture::TextureLoader,
    },
    input::{Command, InputController},
    simulation::{
        generate_starfield, AsteroidBelt, FrameClock, SceneError, Simulation, SolarSystem,
    },
};

/// Application context: owns the scene, the camera, the stars and the frame
/// clock, and hands a fresh [`Frame`] to the renderer on every redraw.
pub struct OrreryApp<R: Renderer> {
    scene: SolarSystem,
    camera_manager: CameraManager,
    input: InputController,
    stars: Vec<PointVertex>,
    meshes: SceneMeshes,
    clock: FrameClock,
    time_scale_step: f32,
    renderer: R,
    window_config: WindowConfig,
    window: Option<Arc<Window>>,
    exit_requested: bool,
}

impl<R: Renderer> OrreryApp<R> {
    /// Builds the scene described by `config`, resolving textures through
    /// `loader` and handing their pixels to `renderer`.
    pub fn from_config(
        config: &OrreryConfig,
        mut renderer: R,
        loader: &mut dyn TextureLoader,
    ) -> Result<Self, SceneError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let scene_config = &config.scene;
        let mut scene = SolarSystem::from_params(
            &scene_config.name,
            scene_config.sun.clone(),
            scene_config.bodies.iter().cloned(),
        )?;
        scene.set_time_scale(scene_config.time_scale);
        if !scene_config.show_orbits {
            scene.toggle_orbits();
        }
        if !scene_config.use_textures {
            scene.toggle_textures();
        }
        if config.asteroid_belt.enabled {
            scene.set_asteroid_belt(Some(AsteroidBelt::generate(&config.asteroid_belt, &mut rng)));
        }
        scene.load_textures(loader);
        for handle in scene.texture_handles() {
            if let Some(data) = loader.get(handle) {
                renderer.upload_texture(handle, data);
            }
        }

        let stars = generate_starfield(config.starfield.count, config.starfield.radius, &mut rng)
            .iter()
            .map(PointVertex::from)
            .collect();

        let (width, height) = (config.window.width, config.window.height);
        let aspect = if width == 0 || height == 0 {
            1.0
        } else {
            width as f32 / height as f32
        };
        let camera = OrbitCamera::new(
            config.camera.distance,
            config.camera.pitch,
            config.camera.yaw,
            Vector3::zero(),
            aspect,
        );

        log::info!(
            "Scene '{}' ready: {} bodies, {} stars",
            scene_config.name,
            scene.bodies().len(),
            config.starfield.count
        );

        Ok(Self {
            scene,
            camera_manager: CameraManager::new(camera, config.camera.controls),
            input: InputController::default(),
            stars,
            meshes: SceneMeshes::new(),
            clock: FrameClock::new(),
            time_scale_step: scene_config.time_scale_step,
            renderer,
            window_config: config.window.clone(),
            window: None,
            exit_requested: false,
        })
    }

    /// Applies one user command.
    pub fn apply(&mut self, command: Command) {
        if self.camera_manager.process_command(command) {
            return;
        }

        match command {
            Command::SpeedUp => self.scene.adjust_time_scale(self.time_scale_step),
            Command::SpeedDown => self.scene.adjust_time_scale(-self.time_scale_step),
            Command::TogglePause => self.scene.toggle_pause(),
            Command::ToggleOrbits => self.scene.toggle_orbits(),
            Command::ToggleTextures => self.scene.toggle_textures(),
            Command::Quit => {
                log::info!("Quit requested");
                self.exit_requested = true;
            }
            // Camera commands were consumed above.
            _ => {}
        }

        if let Some(window) = &self.window {
            window.set_title(&self.scene.status_line());
        }
    }

    /// Advances the scene by the real time elapsed since the previous tick.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = self.clock.tick(now);
        self.scene.update(dt);
        dt
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame::build(
            &self.scene,
            &self.camera_manager.camera,
            &self.meshes,
            &self.stars,
        )
    }

    pub fn render(&mut self) {
        let frame = Frame::build(
            &self.scene,
            &self.camera_manager.camera,
            &self.meshes,
            &self.stars,
        );
        self.renderer.render(&frame);
    }

    pub fn scene(&self) -> &SolarSystem {
        &self.scene
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera_manager.camera
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn stars(&self) -> &[PointVertex] {
        &self.stars
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    /// Runs the event loop until the window closes or a quit command arrives.
    ///
    /// The window is the input surface and shows the status line in its
    /// title. What ends up on screen is up to `R`; with [`LogRenderer`] the
    /// window stays blank.
    ///
    /// [`LogRenderer`]: crate::gfx::renderer::LogRenderer
    pub fn run(mut self) -> Result<(), EventLoopError> {
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self)
    }
}

impl<R: Renderer> ApplicationHandler for OrreryApp<R> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WindowAttributes::default()
            .with_title(self.window_config.title.clone())
            .with_inner_size(LogicalSize::new(
                self.window_config.width,
                self.window_config.height,
            ));

        match event_loop.create_window(attributes) {
            Ok(window) => {
                let size = window.inner_size();
                self.camera_manager
                    .camera
                    .resize_projection(size.width, size.height);
                self.renderer.resize(size.width, size.height);
                window.set_title(&self.scene.status_line());
                self.window = Some(Arc::new(window));
            }
            Err(err) => {
                log::error!("Failed to create window: {}", err);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let Some(command) = self.input.process_key_event(&event) {
                    self.apply(command);
                }
                if self.exit_requested {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.camera_manager.camera.resize_projection(width, height);
                self.renderer.resize(width, height);
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.tick(Instant::now());
                self.render();
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
