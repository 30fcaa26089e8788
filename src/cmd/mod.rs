pub mod calculate;
pub mod chart;
pub mod compare;
pub mod presets;
pub mod sensitivity;
pub mod share;
