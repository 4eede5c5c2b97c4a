/// Per-frame orchestration of the point cloud pipeline
use std::io;
use std::time::Duration;

use crate::clock::RenderClock;
use crate::config::{Color, RenderConfig};
use crate::error::RenderError;
use crate::geometry::{generate, Point2D};
use crate::projection::Projector;
use crate::transform::Transform;

/// A drawing target that can fill rectangles and publish a finished frame
pub trait Surface {
    fn clear(&mut self, color: Color) -> io::Result<()>;

    /// Fill a rectangle; parts outside the surface are ignored
    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color)
        -> io::Result<()>;

    fn present(&mut self) -> io::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyPressed(String),
    Other,
}

/// Non-blocking source of input events
pub trait EventSource {
    /// Next pending event, or `None` once the queue is drained
    fn poll_event(&mut self) -> io::Result<Option<InputEvent>>;
}

pub trait Timer {
    fn delay(&mut self, duration: Duration);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Drives the spinning cube: regenerate, rotate, project and draw every frame
pub struct FrameLoop {
    config: RenderConfig,
    projector: Projector,
    clock: RenderClock,
    state: LoopState,
}

impl FrameLoop {
    pub fn new(config: RenderConfig) -> Result<Self, RenderError> {
        config.validate()?;

        Ok(Self {
            projector: Projector::new(config.width, config.height),
            config,
            clock: RenderClock::new(),
            state: LoopState::Running,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn clock(&self) -> &RenderClock {
        &self.clock
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Run frames until a quit event arrives
    pub fn run<S, E, T>(
        &mut self,
        surface: &mut S,
        events: &mut E,
        timer: &mut T,
    ) -> Result<(), RenderError>
    where
        S: Surface,
        E: EventSource,
        T: Timer,
    {
        log::info!(
            "Starting frame loop: {} points, edge length {}",
            self.config.total_points,
            self.config.edge_length
        );

        while self.step(surface, events, timer)? == LoopState::Running {}

        log::info!("Frame loop stopped after {} frames", self.clock.frame_index());
        Ok(())
    }

    /// Handle pending events, then render one frame, wait, and advance the clock
    pub fn step<S, E, T>(
        &mut self,
        surface: &mut S,
        events: &mut E,
        timer: &mut T,
    ) -> Result<LoopState, RenderError>
    where
        S: Surface,
        E: EventSource,
        T: Timer,
    {
        if self.state == LoopState::Stopped {
            return Ok(self.state);
        }

        self.handle_events(events)?;
        if self.state == LoopState::Stopped {
            return Ok(self.state);
        }

        self.render_frame(surface)?;
        timer.delay(self.config.frame_delay);
        self.clock.advance();

        Ok(self.state)
    }

    fn handle_events<E: EventSource>(&mut self, events: &mut E) -> Result<(), RenderError> {
        while let Some(event) = events.poll_event().map_err(RenderError::Events)? {
            match event {
                InputEvent::Quit => {
                    log::info!("Quit requested");
                    self.state = LoopState::Stopped;
                }
                InputEvent::KeyPressed(key) => log::debug!("Key pressed: {}", key),
                InputEvent::Other => {}
            }
        }
        Ok(())
    }

    /// Clear, draw every point of the current frame, and present
    pub fn render_frame<S: Surface>(&self, surface: &mut S) -> Result<(), RenderError> {
        let config = &self.config;
        surface
            .clear(config.background)
            .map_err(RenderError::Surface)?;

        for point in self.project_frame()? {
            surface
                .fill_rect(
                    point.x,
                    point.y,
                    config.point_size,
                    config.point_size,
                    config.foreground,
                )
                .map_err(RenderError::Surface)?;
        }

        surface.present().map_err(RenderError::Surface)
    }

    /// Surface coordinates of every point for the current clock, in cloud order
    pub fn project_frame(&self) -> Result<Vec<Point2D>, RenderError> {
        let cloud = generate(self.config.edge_length, self.config.total_points)?;
        let angles = self.clock.angles(&self.config.motion);
        let rotation = Transform::rotation_matrix(&angles);

        Ok(cloud
            .iter()
            .map(|&point| self.projector.project(Transform::apply(&rotation, point)))
            .collect())
    }
}
