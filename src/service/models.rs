// Models for the compile exchange
pub mod compile;
