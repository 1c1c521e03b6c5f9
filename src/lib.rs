pub mod assets;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod input;
pub mod spawner;
pub mod timer;
