pub mod base_coord;
pub mod error;
pub mod renderer;
pub mod track_properties;
pub mod window_function;

pub use base_coord::BaseCoord;
pub use error::TrackError;
pub use renderer::RendererKind;
pub use track_properties::{TrackProperties, UNBOUNDED_VISIBILITY_WINDOW};
pub use window_function::WindowFunction;

pub use egui::Color32;
