mod cli;
mod common;
