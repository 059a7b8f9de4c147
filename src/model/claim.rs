use crate::{
    error::verification::VerificationError,
    model::guild::{HIGHEST_GRADE, LOWEST_GRADE},
    util::text::{first_char, last_word, title_case},
};

/// Raw `/verify` submission as typed by the member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    pub first_name: String,
    pub last_name: String,
    pub grade: i64,
    pub teacher_name: String,
    pub student_number: i64,
}

impl VerificationRequest {
    /// Nickname given to a verified member: title-cased first name followed by
    /// the last initial, e.g. `"John S."`.
    ///
    /// # Returns
    /// - `Ok(String)` - The nickname
    /// - `Err(VerificationError::EmptyName)` - First or last name is blank
    pub fn nickname(&self) -> Result<String, VerificationError> {
        let first_name = title_case(non_empty(&self.first_name, "first name")?);
        let last_initial = name_initial(&self.last_name, "last name")?;

        Ok(format!("{} {}.", first_name, last_initial))
    }
}

/// Identity claim derived from a [`VerificationRequest`] and checked against
/// the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityClaim {
    pub first_initial: char,
    pub last_initial: char,
    pub grade: i64,
    pub teacher_initial: char,
    pub student_number: i64,
}

impl IdentityClaim {
    /// Builds a claim from free-text names.
    ///
    /// Initials are the first letter of the title-cased first and last names;
    /// the teacher initial is the first letter of the last word of the
    /// title-cased teacher name. Initials are not range-checked here, that is
    /// the roster's job.
    ///
    /// # Arguments
    /// - `request` - The submitted `/verify` options
    ///
    /// # Returns
    /// - `Ok(IdentityClaim)` - Claim ready for verification
    /// - `Err(VerificationError::EmptyName)` - A name or the teacher name is blank
    /// - `Err(VerificationError::GradeOutOfRange)` - Grade is not 7 through 12
    pub fn from_request(request: &VerificationRequest) -> Result<Self, VerificationError> {
        let first_initial = name_initial(&request.first_name, "first name")?;
        let last_initial = name_initial(&request.last_name, "last name")?;

        let teacher_name = title_case(&request.teacher_name);
        let teacher_initial = last_word(&teacher_name)
            .and_then(first_char)
            .ok_or(VerificationError::EmptyName("teacher name"))?;

        if !(LOWEST_GRADE..=HIGHEST_GRADE).contains(&request.grade) {
            return Err(VerificationError::GradeOutOfRange(request.grade));
        }

        Ok(Self {
            first_initial,
            last_initial,
            grade: request.grade,
            teacher_initial,
            student_number: request.student_number,
        })
    }
}

fn non_empty<'a>(value: &'a str, field: &'static str) -> Result<&'a str, VerificationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(VerificationError::EmptyName(field));
    }
    Ok(trimmed)
}

fn name_initial(value: &str, field: &'static str) -> Result<char, VerificationError> {
    first_char(&title_case(non_empty(value, field)?)).ok_or(VerificationError::EmptyName(field))
}
