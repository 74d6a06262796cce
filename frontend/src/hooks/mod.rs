pub mod use_controller;

pub use use_controller::use_controller;
