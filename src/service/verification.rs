//! Student verification against the roster.

use crate::{
    data::GuildRepository,
    error::verification::VerificationError,
    model::{IdentityClaim, RoleChanges, RosterIndex, VerificationRequest},
};

/// Result of a well-formed verification request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Claim matched a student and the guild is configured.
    Verified {
        /// Nickname to give the member.
        nickname: String,
        /// All grade roles removed, then the verified and grade roles added.
        roles: RoleChanges,
    },
    /// Claim matched a student but the guild has no configuration yet.
    GuildNotInitialized,
    /// No student on the roster matches the claim.
    NoMatch,
}

pub struct VerificationService<'a> {
    roster: &'a RosterIndex,
    guilds: &'a GuildRepository,
}

impl<'a> VerificationService<'a> {
    pub fn new(roster: &'a RosterIndex, guilds: &'a GuildRepository) -> Self {
        Self { roster, guilds }
    }

    /// Verifies a `/verify` submission for a guild.
    ///
    /// Builds an identity claim from the submitted names, checks it against the
    /// roster, and on a match works out the role changes and nickname for the
    /// guild's configuration.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the command was used in
    /// - `request` - Submitted `/verify` options
    ///
    /// # Returns
    /// - `Ok(VerificationOutcome)` - Verified, no match, or guild not initialized
    /// - `Err(VerificationError)` - Submission is invalid input
    pub async fn verify(
        &self,
        guild_id: u64,
        request: &VerificationRequest,
    ) -> Result<VerificationOutcome, VerificationError> {
        let claim = IdentityClaim::from_request(request)?;

        if !self.roster.verify(&claim)? {
            return Ok(VerificationOutcome::NoMatch);
        }

        let Some(guild) = self.guilds.find_by_guild_id(guild_id).await else {
            return Ok(VerificationOutcome::GuildNotInitialized);
        };

        let grade_role_id = guild
            .grade_role_id(claim.grade)
            .ok_or(VerificationError::GradeOutOfRange(claim.grade))?;

        Ok(VerificationOutcome::Verified {
            nickname: request.nickname()?,
            roles: RoleChanges {
                add: vec![guild.verified_role_id, grade_role_id],
                remove: guild.grade_role_ids.to_vec(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::RosterRepository, error::verification::InitialPosition};
    use test_utils::{
        builder::TestBuilder,
        context::TestContext,
        factory::{GuildFactory, StudentFactory},
    };

    const GUILD_ID: u64 = 583464194331115566;

    fn request(first: &str, last: &str, grade: i64, teacher: &str) -> VerificationRequest {
        VerificationRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
            grade,
            teacher_name: teacher.to_string(),
            student_number: 999,
        }
    }

    async fn setup(test: &TestContext) -> (RosterIndex, GuildRepository) {
        let roster = RosterRepository::new(&test.roster_path)
            .load()
            .await
            .unwrap();
        let guilds = GuildRepository::load(&test.guilds_path).await.unwrap();
        (roster, guilds)
    }

    fn john_smith() -> StudentFactory {
        StudentFactory::new()
            .initials("J", "S")
            .grade(9)
            .teacher_initial("M")
            .student_number(123456)
    }

    /// Tests a matching claim in a configured guild.
    ///
    /// The student number differs from the roster and is ignored.
    ///
    /// Expected: Verified with grade roles swapped and nickname "John S."
    #[tokio::test]
    async fn verifies_matching_student() {
        let test = TestBuilder::new()
            .with_student(john_smith())
            .with_guild(
                GuildFactory::new()
                    .guild_id(GUILD_ID)
                    .verified_role(1)
                    .grade_roles(&[7, 8, 9, 10, 11, 12]),
            )
            .build()
            .unwrap();
        let (roster, guilds) = setup(&test).await;
        let service = VerificationService::new(&roster, &guilds);

        let outcome = service
            .verify(GUILD_ID, &request("john", "smith", 9, "Miller"))
            .await;

        assert_eq!(
            outcome,
            Ok(VerificationOutcome::Verified {
                nickname: "John S.".to_string(),
                roles: RoleChanges {
                    add: vec![1, 9],
                    remove: vec![7, 8, 9, 10, 11, 12],
                },
            })
        );
    }

    /// Tests a claim whose grade differs from the roster.
    ///
    /// Expected: NoMatch
    #[tokio::test]
    async fn wrong_grade_is_no_match() {
        let test = TestBuilder::new()
            .with_student(john_smith())
            .with_guild(GuildFactory::new().guild_id(GUILD_ID))
            .build()
            .unwrap();
        let (roster, guilds) = setup(&test).await;
        let service = VerificationService::new(&roster, &guilds);

        let outcome = service
            .verify(GUILD_ID, &request("John", "Smith", 10, "Miller"))
            .await;

        assert_eq!(outcome, Ok(VerificationOutcome::NoMatch));
    }

    /// Tests a matching claim in a guild without configuration.
    ///
    /// Expected: GuildNotInitialized
    #[tokio::test]
    async fn uninitialized_guild() {
        let test = TestBuilder::new().with_student(john_smith()).build().unwrap();
        let (roster, guilds) = setup(&test).await;
        let service = VerificationService::new(&roster, &guilds);

        let outcome = service
            .verify(GUILD_ID, &request("John", "Smith", 9, "Mr. Miller"))
            .await;

        assert_eq!(outcome, Ok(VerificationOutcome::GuildNotInitialized));
    }

    /// Tests names that cannot produce an A-Z initial.
    ///
    /// Expected: Err(InvalidInitial) for a digit, Err(EmptyName) for a blank teacher
    #[tokio::test]
    async fn rejects_invalid_input() {
        let test = TestBuilder::new().with_student(john_smith()).build().unwrap();
        let (roster, guilds) = setup(&test).await;
        let service = VerificationService::new(&roster, &guilds);

        assert_eq!(
            service
                .verify(GUILD_ID, &request("John", "9mith", 9, "Miller"))
                .await,
            Err(VerificationError::InvalidInitial {
                position: InitialPosition::Last,
                value: '9',
            })
        );
        assert_eq!(
            service.verify(GUILD_ID, &request("John", "Smith", 9, " ")).await,
            Err(VerificationError::EmptyName("teacher name"))
        );
    }
}
