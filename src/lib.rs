pub mod hotkey;
pub mod layout;
pub mod logging;
pub mod overlay;
pub mod resolver;
pub mod scene;
pub mod session;
pub mod settings;
