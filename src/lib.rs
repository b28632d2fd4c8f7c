//! Out-of-office tracking for a chat bot: time mentions in plain words,
//! declared absences per member, and the queries answered from them.

pub mod availability;
pub mod bot;
pub mod cli;
pub mod console;
pub mod logger;
pub mod utils;
