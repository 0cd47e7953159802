pub mod command_parser;
pub mod commands;
pub mod manual;
#[cfg(test)]
mod tests;
