/// Hex listing output.
pub mod dump;
