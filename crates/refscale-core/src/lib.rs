pub mod config;
pub mod consts;
pub mod detection;
pub mod display;
pub mod error;
pub mod frame;
pub mod io;
