use clap::Parser;
use log::LevelFilter;

use crate::availability::{Compatibility, Profile};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Member id the console speaks as
    #[arg(long, env = "WHEREABOUTS_USER_ID", default_value = "U0CONSOLE")]
    pub user_id: String,

    /// Display name of the console member
    #[arg(long, env = "WHEREABOUTS_USER_NAME", default_value = "console")]
    pub user_name: String,

    /// Other known members, as ID=NAME. Can be repeated
    #[arg(long = "member", value_name = "ID=NAME", value_parser = parse_member)]
    pub members: Vec<Profile>,

    /// Resolve both ends of "from X until Y" from X
    #[arg(long)]
    pub legacy_full_range: bool,

    /// Answer "where is" with the latest status even when it is over
    #[arg(long)]
    pub legacy_where_is: bool,

    /// Keep members without a return date out until further notice
    #[arg(long)]
    pub until_further_notice: bool,

    /// Minimum level of log records
    #[arg(long, env = "LOG_LEVEL", default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Write log to this file
    #[arg(long, value_name = "FILE")]
    pub log: Option<String>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    pub fn level(&self) -> LevelFilter {
        match self.debug {
            0 => self.log_level,
            1 => LevelFilter::Debug,
            _ => LevelFilter::max(),
        }
    }

    pub fn compatibility(&self) -> Compatibility {
        Compatibility {
            shared_range_token: self.legacy_full_range,
            where_is_ignores_date: self.legacy_where_is,
            open_end_until_further_notice: self.until_further_notice,
        }
    }

    pub fn speaker(&self) -> Profile {
        Profile::new(&self.user_id, &self.user_name)
    }
}

fn parse_member(s: &str) -> Result<Profile, String> {
    match s.split_once('=') {
        Some((id, name)) if !id.trim().is_empty() && !name.trim().is_empty() => {
            Ok(Profile::new(id.trim(), name.trim()))
        }
        _ => Err(format!("expected ID=NAME, got '{}'", s)),
    }
}

#[cfg(test)]
mod should {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["whereabouts"]).unwrap();
        assert_eq!(cli.speaker(), Profile::new("U0CONSOLE", "console"));
        assert_eq!(cli.compatibility(), Compatibility::default());
        assert!(cli.members.is_empty());
    }

    #[test]
    fn parse_repeated_members() {
        let cli = Cli::try_parse_from([
            "whereabouts",
            "--member",
            "U1=alice",
            "--member",
            "U2=bob",
        ])
        .unwrap();
        assert_eq!(
            cli.members,
            vec![Profile::new("U1", "alice"), Profile::new("U2", "bob")]
        );
    }

    #[test]
    fn reject_member_without_name() {
        assert!(Cli::try_parse_from(["whereabouts", "--member", "U1"]).is_err());
        assert!(Cli::try_parse_from(["whereabouts", "--member", "U1="]).is_err());
    }

    #[test]
    fn turn_on_compatibility_flags() {
        let cli = Cli::try_parse_from(["whereabouts", "--legacy-full-range", "--legacy-where-is"])
            .unwrap();
        assert_eq!(cli.compatibility(), Compatibility::legacy());
    }

    #[test]
    fn leave_open_ended_absences_uncovered_unless_asked() {
        let cli = Cli::try_parse_from(["whereabouts"]).unwrap();
        assert!(!cli.compatibility().open_end_until_further_notice);

        let cli = Cli::try_parse_from(["whereabouts", "--until-further-notice"]).unwrap();
        assert!(cli.compatibility().open_end_until_further_notice);
    }

    #[test]
    fn raise_level_with_debug_count() {
        let cli = Cli::try_parse_from(["whereabouts", "--log-level", "warn"]).unwrap();
        assert_eq!(cli.level(), LevelFilter::Warn);

        let cli = Cli::try_parse_from(["whereabouts", "-d"]).unwrap();
        assert_eq!(cli.level(), LevelFilter::Debug);

        let cli = Cli::try_parse_from(["whereabouts", "-dd"]).unwrap();
        assert_eq!(cli.level(), LevelFilter::Trace);
    }
}
