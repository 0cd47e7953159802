mod booking;
mod command;
mod common;
mod config;
