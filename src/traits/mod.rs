pub mod command;
pub mod history;
