pub mod generator;
pub mod transcriber;
