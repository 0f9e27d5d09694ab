// DarkMin services
// Stateless helpers and timer-driven engines used by the shell and the landing page.

pub mod clock;
pub mod navigation;
pub mod particle_field;
pub mod settings_engine;
pub mod ticker;
