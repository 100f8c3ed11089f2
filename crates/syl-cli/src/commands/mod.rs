pub mod dispatch;
pub mod plan;
pub mod prepare;
pub mod resources;
pub mod shared;
