pub mod aim;
pub mod collision;
pub mod movement;
pub mod pockets;
pub mod rules;

pub use aim::*;
pub use collision::*;
pub use movement::*;
pub use pockets::*;
pub use rules::*;
