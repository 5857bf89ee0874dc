pub mod app;
pub mod buffer;
pub mod controls;
pub mod devices;
pub mod input;
pub mod keyboard;
pub mod mouse;
pub mod wheel;

pub use app::{App, FrameReport};
pub use buffer::EventBuffer;
pub use controls::{KeyboardPanning, MousePanning, WheelZoom};
pub use devices::InputDevices;
pub use input::InputEvent;
pub use keyboard::Keyboard;
pub use mouse::Mouse;
pub use wheel::MouseWheel;
