//! Wire DTOs for the portal authentication endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the host's JSON contract (`fullName`, `userType`), so
//! serde renames live here and nowhere else.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    /// Build a sign-in request from raw field values. The email is trimmed;
    /// the password is sent exactly as typed.
    pub fn from_fields(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_owned(),
            password: password.to_owned(),
        }
    }
}

/// Account type chosen on the sign-up form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Student,
    Teacher,
    Admin,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::Student, UserType::Teacher, UserType::Admin];

    /// Value sent on the wire and used as the `<option>` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::Admin => "admin",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Student => "Étudiant",
            Self::Teacher => "Enseignant",
            Self::Admin => "Administrateur",
        }
    }

    /// Parse a `<select>` value. Unknown values fall back to `Student`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "teacher" => Self::Teacher,
            "admin" => Self::Admin,
            _ => Self::Student,
        }
    }
}

/// Body of `POST /api/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

/// Parsed response of either auth endpoint.
///
/// `redirect` is only meaningful when `success` is true, `error` only when it
/// is false. Unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SubmissionOutcome {
    pub success: bool,
    #[serde(default)]
    pub redirect: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
