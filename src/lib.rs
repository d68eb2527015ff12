pub mod audio;
pub mod clock;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod input;
pub mod particles;
pub mod render;
pub mod screen;
