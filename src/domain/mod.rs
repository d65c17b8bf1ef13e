//! Domain types and the ports the application layer depends on.

pub mod account;
pub mod command;
pub mod ports;
pub mod transfer;
