use chrono::{DateTime, Local};

use super::compat::Compatibility;
use super::repository::Repository;
use super::status::Status;
use super::user::{User, UserId};

/// A member as the chat platform describes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: UserId,
    pub name: String,
}

impl Profile {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
        }
    }
}

pub struct AvailabilityService<R: Repository> {
    repo: R,
    compat: Compatibility,
}

impl<R: Repository> AvailabilityService<R> {
    pub fn new(repo: R, compat: Compatibility) -> Self {
        Self { repo, compat }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Anyone without a record is available. Once a record exists this
    /// stays false, whatever the dates of their statuses.
    pub fn available(&self, id: &UserId) -> bool {
        self.repo.find(id).is_none()
    }

    /// The user if they are out on `date`.
    pub fn where_is(&self, id: &UserId, date: DateTime<Local>) -> Option<User> {
        let user = self.repo.find(id)?;
        match self.compat.where_is_ignores_date || !user.is_available(date) {
            true => Some(user),
            false => None,
        }
    }

    /// Like [`Self::where_is`] for several ids at once; unknown ids are skipped.
    pub fn where_are(&self, ids: &[UserId], date: DateTime<Local>) -> Vec<User> {
        let users = self.repo.find_all_by_id(ids);
        match self.compat.where_is_ignores_date {
            true => users,
            false => users
                .into_iter()
                .filter(|user| !user.is_available(date))
                .collect(),
        }
    }

    pub fn where_is_everybody(&self, date: DateTime<Local>) -> Vec<User> {
        self.repo.find_all_out(date)
    }

    /// Records `status` for the member, creating their record on first use.
    /// The username is only copied in when the record is created.
    pub fn create_status(&mut self, profile: &Profile, status: Status) -> User {
        let status = match self.compat.open_end_until_further_notice {
            true => status.until_further_notice(),
            false => status,
        };

        let user = match self.repo.find(&profile.id) {
            Some(mut user) => {
                user.add_status(status);
                user
            }
            None => User::new(profile.id.clone(), &profile.name, status),
        };

        log::info!(
            "{} ({}) declared {} from {}",
            user.id,
            user.username,
            user.status().reason(),
            user.status().from()
        );

        self.repo.add(user.clone());
        user
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::availability::repository::MockRepository;
    use crate::availability::{InMemoryRepository, Reason};
    use chrono::TimeZone;
    use mockall::predicate::eq;

    fn day(d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, d, 12, 0, 0).unwrap()
    }

    fn status(from: u32, to: u32) -> Status {
        Status::new("", day(from), Some(day(to)), Reason::Vacation)
    }

    fn service() -> AvailabilityService<InMemoryRepository> {
        AvailabilityService::new(InMemoryRepository::new(), Compatibility::default())
    }

    #[test]
    fn create_one_user_with_one_status_for_new_member() {
        let mut service = service();
        let user = service.create_status(&Profile::new("U1", "alice"), status(1, 5));

        assert_eq!(user.username, "alice");
        assert_eq!(user.status_count(), 1);
        assert_eq!(service.repository().len(), 1);
    }

    #[test]
    fn append_status_for_known_member() {
        let mut service = service();
        service.create_status(&Profile::new("U1", "alice"), status(1, 5));
        let user = service.create_status(&Profile::new("U1", "alice"), status(10, 15));

        assert_eq!(service.repository().len(), 1);
        assert_eq!(user.status_count(), 2);
        assert_eq!(user.status(), &status(10, 15));
    }

    #[test]
    fn keep_first_username() {
        let mut service = service();
        service.create_status(&Profile::new("U1", "alice"), status(1, 5));
        let user = service.create_status(&Profile::new("U1", "alicia"), status(10, 15));
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn report_available_only_without_record() {
        let mut service = service();
        assert!(service.available(&"U1".into()));
        service.create_status(&Profile::new("U1", "alice"), status(1, 5));
        assert!(!service.available(&"U1".into()));
    }

    #[test]
    fn locate_user_out_on_date() {
        let mut service = service();
        service.create_status(&Profile::new("U1", "alice"), status(1, 5));
        assert!(service.where_is(&"U1".into(), day(3)).is_some());
        assert!(service.where_is(&"U1".into(), day(8)).is_none());
        assert!(service.where_is(&"U404".into(), day(3)).is_none());
    }

    #[test]
    fn ignore_date_in_where_is_when_legacy() {
        let compat = Compatibility {
            where_is_ignores_date: true,
            ..Default::default()
        };
        let mut service = AvailabilityService::new(InMemoryRepository::new(), compat);
        service.create_status(&Profile::new("U1", "alice"), status(1, 5));
        assert!(service.where_is(&"U1".into(), day(8)).is_some());
        assert_eq!(service.where_are(&["U1".into()], day(8)).len(), 1);
    }

    #[test]
    fn locate_several_users_out_on_date() {
        let mut service = service();
        service.create_status(&Profile::new("U1", "alice"), status(1, 5));
        service.create_status(&Profile::new("U2", "bob"), status(6, 9));

        let ids: Vec<UserId> = vec!["U1".into(), "U2".into(), "U3".into()];
        let users = service.where_are(&ids, day(3));
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, *"U1");
    }

    #[test]
    fn list_everybody_out() {
        let mut service = service();
        service.create_status(&Profile::new("U1", "alice"), status(1, 5));
        service.create_status(&Profile::new("U2", "bob"), status(6, 9));

        let users = service.where_is_everybody(day(7));
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "bob");
    }

    #[test]
    fn not_locate_open_ended_absence_by_default() {
        let mut service = service();
        service.create_status(
            &Profile::new("U1", "alice"),
            Status::new("", day(1), None, Reason::Sick),
        );
        assert!(service.where_is(&"U1".into(), day(3)).is_none());
        assert!(service.where_is_everybody(day(3)).is_empty());
    }

    #[test]
    fn locate_open_ended_absence_until_further_notice() {
        let compat = Compatibility {
            open_end_until_further_notice: true,
            ..Default::default()
        };
        let mut service = AvailabilityService::new(InMemoryRepository::new(), compat);
        service.create_status(
            &Profile::new("U1", "alice"),
            Status::new("", day(1), None, Reason::Sick),
        );
        assert!(service.where_is(&"U1".into(), day(3)).is_some());
        assert_eq!(service.where_is_everybody(day(30)).len(), 1);
    }

    #[test]
    fn upsert_created_user_into_repository() {
        let mut repo = MockRepository::new();
        repo.expect_find()
            .with(eq(UserId::from("U1")))
            .times(1)
            .returning(|_| None);
        repo.expect_add()
            .withf(|user| user.id == *"U1" && user.status_count() == 1)
            .times(1)
            .return_const(());

        let mut service = AvailabilityService::new(repo, Compatibility::default());
        service.create_status(&Profile::new("U1", "alice"), status(1, 5));
    }

    #[test]
    fn upsert_grown_user_into_repository() {
        let existing = User::new("U1".into(), "alice", status(1, 5));
        let mut repo = MockRepository::new();
        repo.expect_find()
            .times(1)
            .returning(move |_| Some(existing.clone()));
        repo.expect_add()
            .withf(|user| user.status_count() == 2)
            .times(1)
            .return_const(());

        let mut service = AvailabilityService::new(repo, Compatibility::default());
        service.create_status(&Profile::new("U1", "alice"), status(10, 15));
    }

    #[test]
    fn delegate_everybody_query_to_repository() {
        let mut repo = MockRepository::new();
        repo.expect_find_all_out()
            .with(eq(day(3)))
            .times(1)
            .returning(|_| Vec::new());

        let service = AvailabilityService::new(repo, Compatibility::default());
        assert!(service.where_is_everybody(day(3)).is_empty());
    }
}
