//! Domain modules

pub mod mail;
