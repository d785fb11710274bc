pub mod entities;
pub mod errors;
pub mod outcomes;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use outcomes::*;
pub use value_objects::*;
