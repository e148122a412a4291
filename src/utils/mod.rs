pub mod dir;
pub mod owner;
