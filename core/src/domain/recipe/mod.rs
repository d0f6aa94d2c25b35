pub mod entities;
pub mod normalize;
pub mod ports;
pub mod scaling;
pub mod services;
pub mod value_objects;

pub use entities::*;
pub use ports::*;
pub use value_objects::*;
