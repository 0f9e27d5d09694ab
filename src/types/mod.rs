// DarkMin shared type definitions
// Each submodule defines types used across the application.

pub mod clock;
pub mod errors;
pub mod particle;
pub mod settings;
pub mod tab;
pub mod view;
