pub mod animation;
pub mod canvas;
pub mod color;
pub mod config;
pub mod constants;
pub mod governor;
pub mod particles;
pub mod proximity;

pub use animation::*;
pub use canvas::*;
pub use color::*;
pub use config::*;
pub use governor::*;
pub use particles::*;
pub use proximity::{pair_weight, pointer_weight, LineCounts};
