pub mod cloth_model;
pub mod config;
pub mod controller_message;
pub mod cworld;
pub mod error;
pub mod point;
pub mod point_set;
pub mod posbox;
pub mod stick;
pub mod stick_set;

pub type V2 = nalgebra::Vector2<f32>;

pub use config::{ClothConfig, SolverKind};
pub use cworld::ClothWorld;
pub use error::ConfigError;
pub use protocol::pointer::{Button, PointerState};
