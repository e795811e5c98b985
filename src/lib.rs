pub mod generate;
pub mod matrix;

pub type Element = i64;
