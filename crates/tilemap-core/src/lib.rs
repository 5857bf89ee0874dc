pub mod config;
pub mod mesh;
pub mod projection;
pub mod stage;
pub mod surface;
pub mod viewport;

pub use config::NavigationConfig;
pub use mesh::{Material, MeshPlacement, PlaneMesh};
pub use projection::Projection;
pub use stage::Stage;
pub use surface::{DisplayMetrics, HeadlessSurface, Surface};
pub use viewport::Viewport;

// Re-export geometry types so downstream crates share one definition
pub use kurbo::{Point, Rect, Size, Vec2};
