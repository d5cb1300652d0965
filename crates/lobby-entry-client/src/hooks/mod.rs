mod use_entry_controller;

pub use use_entry_controller::*;
