pub mod desktop;
pub mod desktop_window;
pub mod games;
pub mod interop;

pub use desktop::*;
pub use desktop_window::*;
pub use games::*;
pub use interop::*;
