pub mod desktop_icons;
pub mod taskbar;
pub mod workspace_canvas;
