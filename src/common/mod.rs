pub mod kind;
pub mod permissions;
pub mod size;
pub mod style;
