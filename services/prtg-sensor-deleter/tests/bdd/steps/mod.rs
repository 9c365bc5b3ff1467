//! BDD step definitions for the PRTG sensor deleter

pub mod deletion_steps;
