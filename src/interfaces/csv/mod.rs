//! CSV batch interface: command replay in, final balances out.

pub mod account_writer;
pub mod command_reader;
