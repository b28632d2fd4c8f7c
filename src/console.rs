use regex::Regex;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::availability::{Repository, UserId};
use crate::bot::{Bot, Directory};

lazy_static::lazy_static! {
    static ref SPEAKER_PATTERN: Regex = Regex::new(r"^@(?P<id>[A-Za-z0-9_.-]+):\s*(?P<text>.*)$")
        .expect("speaker pattern must compile");
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleLine {
    pub sender: UserId,
    pub text: String,
}

impl ConsoleLine {
    /// `@U2: where is everybody` speaks as `U2`; a line without the prefix
    /// speaks as `speaker`.
    pub fn parse(line: &str, speaker: &UserId) -> Self {
        let line = line.trim();
        match SPEAKER_PATTERN.captures(line) {
            Some(caps) => Self {
                sender: caps["id"].into(),
                text: caps["text"].to_string(),
            },
            None => Self {
                sender: speaker.clone(),
                text: line.to_string(),
            },
        }
    }
}

/// Feeds every input line to the bot and writes its replies until the input
/// is exhausted.
pub async fn run<R, D, I, O>(
    bot: &mut Bot<R, D>,
    speaker: &UserId,
    input: I,
    mut output: O,
) -> anyhow::Result<()>
where
    R: Repository,
    D: Directory,
    I: AsyncBufRead + Unpin,
    O: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let line = ConsoleLine::parse(&line, speaker);
        if let Some(reply) = bot.handle(&line.sender, &line.text) {
            output.write_all(reply.as_bytes()).await?;
            output.write_all(b"\n").await?;
            output.flush().await?;
        }
    }

    log::info!("Input closed, shutting down");
    Ok(())
}
