pub mod datetime;

pub const NEWLINE: &'static str = "\n";
