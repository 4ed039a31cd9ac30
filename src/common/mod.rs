pub mod binary;
pub mod guid;
