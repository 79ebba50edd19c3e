pub mod compute;
pub mod constants;
pub mod display;
pub mod entities;
pub mod input;
pub mod render;
