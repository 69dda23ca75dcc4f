pub mod ai;
pub mod collision;
pub mod layout;
pub mod movement;

pub use ai::*;
pub use collision::*;
pub use layout::*;
pub use movement::*;
