use clap::Parser;
use tokio::io::BufReader;
use whereabouts::availability::{AvailabilityService, InMemoryRepository, MentionParser};
use whereabouts::bot::{Bot, CommandList, StaticDirectory};
use whereabouts::cli::Cli;
use whereabouts::{console, logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initiate logger
    if let Err(err) = logger::setup(cli.log.clone(), cli.level()) {
        panic!("Failed to setup logger: {}", err);
    }

    // Initiate member directory, the console speaker included
    let speaker = cli.speaker();
    let directory: StaticDirectory = cli
        .members
        .iter()
        .cloned()
        .chain(std::iter::once(speaker.clone()))
        .collect();

    // Initiate availability tracking
    let compat = cli.compatibility();
    let service = AvailabilityService::new(InMemoryRepository::new(), compat);
    let mut bot = Bot::new(
        service,
        directory,
        CommandList::all(),
        MentionParser::new(compat),
    );

    log::info!(
        "Listening as {} ({}), compatibility: {:?}",
        speaker.name,
        speaker.id,
        compat
    );

    // Run the bot over stdin/stdout
    let input = BufReader::new(tokio::io::stdin());
    console::run(&mut bot, &speaker.id, input, tokio::io::stdout()).await
}
