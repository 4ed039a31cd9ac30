pub mod error;
pub mod common;

pub use common::guid::{format_sid, guid_to_sid, parse_guid};
