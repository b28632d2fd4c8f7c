use strum::IntoEnumIterator;

use crate::utils;

use super::{Command, CommandProps};

/// Commands the bot answers to. Built once at startup and handed to the bot.
#[derive(Debug, Clone)]
pub struct CommandList {
    commands: Vec<Command>,
}

impl CommandList {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn all() -> Self {
        Self::new(Command::iter().collect())
    }

    pub fn contains(&self, command: &Command) -> bool {
        self.commands.iter().any(|c| c.is_same_kind(command))
    }

    pub fn iter(&self) -> std::slice::Iter<Command> {
        self.commands.iter()
    }

    pub fn help(&self) -> String {
        format_commands(self.commands.iter().filter(|c| c.is_visible()).collect())
    }
}

pub fn format_commands(commands: Vec<&impl CommandProps>) -> String {
    let count = commands.len();
    let mut result_vec = Vec::with_capacity(count);

    for (idx, cmd) in commands.iter().enumerate() {
        let formatted_command = format_command(*cmd, idx == count - 1);
        result_vec.push(formatted_command);
    }

    result_vec.join("")
}

fn format_command(cmd: &impl CommandProps, is_last: bool) -> String {
    let usage = format!("{} {}", cmd.cmd(), cmd.args());
    format!(
        "{:<28} {}{}",
        usage.trim_end(),
        cmd.help(),
        if is_last { "" } else { utils::NEWLINE }
    )
}
