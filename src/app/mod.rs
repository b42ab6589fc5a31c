// Application layer: the command handlers behind the CLI.

pub mod commands;
