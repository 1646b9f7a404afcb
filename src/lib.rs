pub mod cmds;
pub mod conductors;
pub mod config;
mod constructors;
pub mod entities;
pub mod feed;
pub mod handlers;
pub mod interactors;
pub mod presenters;
pub mod repositories;
pub mod usecases;
pub mod utils;

pub use constructors::*;
