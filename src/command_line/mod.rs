//! Command-line parsing and reporting for the `knights_solver` binary.

pub(crate) mod cli;
