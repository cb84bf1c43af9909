//! CLI commands

pub mod file;
pub mod scan;

#[cfg(test)]
mod tests;
