pub mod config;
pub mod context;
pub mod entrance;
pub mod states;
pub mod transfer;
pub mod verify;
