use chrono::{DateTime, Local};
use fnv::FnvHashMap;

use crate::availability::{
    AvailabilityService, MentionParser, Reason, Repository, Status, TimableMention, User, UserId,
};
use crate::utils::{self, datetime};

use super::command::{Command, StatusRequest};
use super::commands_list::CommandList;
use super::directory::Directory;
use super::parse_error::CommandParseError;
use super::user_param::UserParam;

/// An absence whose end the bot asked about and is waiting for.
#[derive(Debug, Clone, PartialEq)]
struct AwaitingReturn {
    reason: Reason,
    from: DateTime<Local>,
}

/// Turns chat messages into availability queries and updates.
///
/// Messages are handled one at a time; the bot holds no locks.
pub struct Bot<R: Repository, D: Directory> {
    service: AvailabilityService<R>,
    directory: D,
    commands: CommandList,
    parser: MentionParser,
    awaiting_return: FnvHashMap<UserId, AwaitingReturn>,
}

impl<R: Repository, D: Directory> Bot<R, D> {
    pub fn new(
        service: AvailabilityService<R>,
        directory: D,
        commands: CommandList,
        parser: MentionParser,
    ) -> Self {
        Self {
            service,
            directory,
            commands,
            parser,
            awaiting_return: FnvHashMap::default(),
        }
    }

    pub fn service(&self) -> &AvailabilityService<R> {
        &self.service
    }

    pub fn handle(&mut self, sender: &UserId, text: &str) -> Option<String> {
        self.handle_at(sender, text, datetime::today())
    }

    /// Handles a message sent at `now`. Returns the reply, if any.
    pub fn handle_at(
        &mut self,
        sender: &UserId,
        text: &str,
        now: DateTime<Local>,
    ) -> Option<String> {
        match text.parse::<Command>() {
            Ok(command) if self.commands.contains(&command) => {
                log::debug!("{} issued {:?}", sender, command);
                Some(self.execute(sender, command, now))
            }
            Ok(_) | Err(CommandParseError::NotRecognizedAsCommand) => {
                self.follow_up(sender, text, now)
            }
            Err(err) => {
                log::debug!("{} sent a malformed command: {}", sender, err);
                Some(format!("I'm sorry I couldn't understand you"))
            }
        }
    }

    fn execute(&mut self, sender: &UserId, command: Command, now: DateTime<Local>) -> String {
        match command {
            Command::Hi => format!("Oh hello!"),
            Command::Help => self.commands.help(),
            Command::WhereIs(param) => self.where_is(param, now),
            Command::Status(request) => self.declare(sender, request, now),
        }
    }

    fn where_is(&self, param: UserParam, now: DateTime<Local>) -> String {
        match param {
            UserParam::Everybody => {
                let users = self.service.where_is_everybody(now);
                match users.is_empty() {
                    true => format!("As far as I know everybody is available"),
                    false => format!("This are the people out: {}{}", utils::NEWLINE, lines(&users)),
                }
            }
            UserParam::Member { id, text } => match self.service.where_is(&id, now) {
                Some(user) => user.to_string(),
                None => format!("As far as I know {} is available", text),
            },
        }
    }

    fn declare(&mut self, sender: &UserId, request: StatusRequest, now: DateTime<Local>) -> String {
        let mention = match self.parser.parse_at(&request.when, now) {
            Ok(mention) => mention,
            Err(err) => {
                log::debug!("{} declared '{}': {}", sender, request.when, err);
                return format!("I'm sorry I can't understand you");
            }
        };

        let status = Status::from_mention(&mention, request.reason, now);
        if let Err(reply) = self.record(sender, status.clone()) {
            return reply;
        }

        match mention.has_only_from() {
            true => {
                self.awaiting_return.insert(
                    sender.clone(),
                    AwaitingReturn {
                        reason: status.reason(),
                        from: status.from(),
                    },
                );
                format!("Ok and when will you be back?")
            }
            false => {
                self.awaiting_return.remove(sender);
                confirmation(&status)
            }
        }
    }

    // Closes an absence left open by a previous declaration, e.g. "until
    // next week" after the bot asked when the sender is back. The end must
    // come after the start; anything else leaves the absence open.
    fn follow_up(&mut self, sender: &UserId, text: &str, now: DateTime<Local>) -> Option<String> {
        let awaiting = self.awaiting_return.get(sender)?.clone();
        let back = self
            .parser
            .parse_at(text, now)
            .ok()
            .and_then(|mention: TimableMention| mention.to().or(mention.from()))
            .filter(|back| *back > awaiting.from)?;

        let status = Status::new("", awaiting.from, Some(back), awaiting.reason);
        if let Err(reply) = self.record(sender, status.clone()) {
            return Some(reply);
        }

        self.awaiting_return.remove(sender);
        Some(confirmation(&status))
    }

    fn record(&mut self, sender: &UserId, status: Status) -> Result<User, String> {
        match self.directory.profile(sender) {
            Ok(profile) => Ok(self.service.create_status(&profile, status)),
            Err(err) => {
                log::error!("Failed to look up {}: {}", sender, err);
                Err(format!("I'm sorry I couldn't find out who you are"))
            }
        }
    }
}

fn confirmation(status: &Status) -> String {
    let until = match status.to() {
        Some(to) => datetime::format_date(&to),
        None => format!("further notice"),
    };
    format!(
        "Ok you are on {} from {} until {}. Enjoy!",
        status.reason(),
        datetime::format_date(&status.from()),
        until
    )
}

fn lines(users: &[User]) -> String {
    users
        .iter()
        .map(|user| user.to_string())
        .collect::<Vec<_>>()
        .join(utils::NEWLINE)
}
