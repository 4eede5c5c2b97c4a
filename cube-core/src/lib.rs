/// Point Cube Core Library - geometry pipeline for the spinning point-cloud cube
///
/// This library generates the cube's edge point cloud, rotates it with Euler
/// angles, projects it onto a 2D surface, and drives the per-frame loop against
/// pluggable surface, event and timer collaborators.

pub mod clock;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use clock::{AngularMotion, RenderClock};
pub use config::{Color, RenderConfig};
pub use error::{ConfigError, RenderError};
pub use frame::{EventSource, FrameLoop, InputEvent, LoopState, Surface, Timer};
pub use geometry::{generate, Point2D, Point3D, PointCloud};
pub use projection::Projector;
pub use transform::{rotate, EulerAngles, Transform};
