use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

static LOG_PATTERN: &'static str = "{d(%Y-%m-%d %H:%M:%S)} | {({l}):5.5} | {f}:{L} — {m}{n}";

pub fn config(output: Option<String>, level: log::LevelFilter) -> anyhow::Result<Config> {
    // Replies go to stdout, so the console appender writes to stderr
    let console_appender = {
        let console = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        Appender::builder().build("console", Box::new(console))
    };

    // Configure a file appender if output is provided
    let file_appender = match output {
        Some(path) => {
            let logfile = FileAppender::builder()
                .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
                .build(path)?;
            Some(Appender::builder().build("logfile", Box::new(logfile)))
        }
        None => None,
    };

    let mut config_builder = Config::builder().appender(console_appender);
    let mut root_builder = Root::builder().appender("console");

    if let Some(appender) = file_appender {
        config_builder = config_builder.appender(appender);
        root_builder = root_builder.appender("logfile");
    }

    Ok(config_builder.build(root_builder.build(level))?)
}

pub fn setup(output: Option<String>, level: log::LevelFilter) -> anyhow::Result<()> {
    log4rs::init_config(config(output, level)?)?;
    Ok(())
}
