//! User model for CampusPass.
//!
//! This module defines the User struct, the closed Role enum, and the
//! role-specific profile variants carried by each user record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// User role for access control.
///
/// The set is closed: every user has exactly one of these three roles,
/// and the route gate matches on them exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Enrolled student.
    Student,
    /// Teaching staff.
    Teacher,
    /// Portal administrator.
    Admin,
}

impl Role {
    /// Convert role to its canonical string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}

/// Role-specific attributes of a user record.
///
/// Serialized internally tagged on `role`, so a persisted user reads as
/// `{"id": ..., "role": "student", "studentId": ..., ...}` with the
/// role-specific fields at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    /// Student enrollment details.
    #[serde(rename_all = "camelCase")]
    Student {
        /// Enrollment identifier (e.g. "20ICT1001").
        student_id: String,
        /// Department / school name.
        department: String,
        /// Course of study.
        course: String,
        /// Current semester number.
        semester: u32,
    },
    /// Teaching staff details.
    #[serde(rename_all = "camelCase")]
    Teacher {
        /// Staff identifier (e.g. "ICT-F-001").
        teacher_id: String,
        /// Department / school name.
        department: String,
        /// Subjects taught.
        subjects: Vec<String>,
        /// Designation (e.g. "Associate Professor").
        designation: String,
    },
    /// Administrator details.
    #[serde(rename_all = "camelCase")]
    Admin {
        /// Staff identifier.
        admin_id: String,
        /// Granted permission names.
        permissions: Vec<String>,
    },
}

impl RoleProfile {
    /// The role this profile variant belongs to.
    pub fn role(&self) -> Role {
        match self {
            RoleProfile::Student { .. } => Role::Student,
            RoleProfile::Teacher { .. } => Role::Teacher,
            RoleProfile::Admin { .. } => Role::Admin,
        }
    }
}

/// A portal user.
///
/// The shared fields cover what any consumer of "some signed-in user"
/// needs; role-specific data lives in [`RoleProfile`] and is reached by
/// matching on it. Role and profile cannot disagree because the role is
/// derived from the profile variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address (unique; the sign-in key).
    pub email: String,
    /// Optional profile image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Role-specific attributes; also carries the `role` tag.
    #[serde(flatten)]
    pub profile: RoleProfile,
}

impl User {
    /// Create a student user.
    pub fn student(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        student_id: impl Into<String>,
        department: impl Into<String>,
        course: impl Into<String>,
        semester: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            profile_image: None,
            profile: RoleProfile::Student {
                student_id: student_id.into(),
                department: department.into(),
                course: course.into(),
                semester,
            },
        }
    }

    /// Create a teacher user.
    pub fn teacher(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        teacher_id: impl Into<String>,
        department: impl Into<String>,
        subjects: Vec<String>,
        designation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            profile_image: None,
            profile: RoleProfile::Teacher {
                teacher_id: teacher_id.into(),
                department: department.into(),
                subjects,
                designation: designation.into(),
            },
        }
    }

    /// Create an admin user.
    pub fn admin(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        admin_id: impl Into<String>,
        permissions: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            profile_image: None,
            profile: RoleProfile::Admin {
                admin_id: admin_id.into(),
                permissions,
            },
        }
    }

    /// Set the profile image reference.
    pub fn with_profile_image(mut self, image: impl Into<String>) -> Self {
        self.profile_image = Some(image.into());
        self
    }

    /// This user's role.
    pub fn role(&self) -> Role {
        self.profile.role()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_student() -> User {
        User::student(
            "s1",
            "Rahul Sharma",
            "student@gbu.ac.in",
            "20ICT1001",
            "School of ICT",
            "B.Tech",
            5,
        )
    }

    #[test]
    fn test_role_as_str() {
        assert_eq!(Role::Student.as_str(), "student");
        assert_eq!(Role::Teacher.as_str(), "teacher");
        assert_eq!(Role::Admin.as_str(), "admin");
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Teacher.to_string(), "teacher");
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("student".parse::<Role>(), Ok(Role::Student));
        assert_eq!("TEACHER".parse::<Role>(), Ok(Role::Teacher));
        assert_eq!("Admin".parse::<Role>(), Ok(Role::Admin));
        assert!("sysop".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_user_role_derived_from_profile() {
        assert_eq!(sample_student().role(), Role::Student);

        let teacher = User::teacher(
            "t1",
            "Dr. Priya Gupta",
            "teacher@gbu.ac.in",
            "ICT-F-001",
            "School of ICT",
            vec!["Data Structures".to_string()],
            "Associate Professor",
        );
        assert_eq!(teacher.role(), Role::Teacher);

        let admin = User::admin("a1", "Admin User", "admin@gbu.ac.in", "ADM-001", vec![]);
        assert_eq!(admin.role(), Role::Admin);
    }

    #[test]
    fn test_user_serializes_with_role_tag() {
        let json = serde_json::to_value(sample_student()).unwrap();

        assert_eq!(json["id"], "s1");
        assert_eq!(json["role"], "student");
        assert_eq!(json["studentId"], "20ICT1001");
        assert_eq!(json["semester"], 5);
        // Absent image must not appear in the record
        assert!(json.get("profileImage").is_none());
    }

    #[test]
    fn test_user_round_trips_through_json() {
        let user = sample_student().with_profile_image("avatars/s1.png");
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();

        assert_eq!(back, user);
    }

    #[test]
    fn test_unknown_role_fails_deserialization() {
        let json = r#"{"id":"x1","name":"X","email":"x@gbu.ac.in","role":"superuser"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }

    #[test]
    fn test_profile_fields_required_for_role() {
        // A student record without enrollment details is rejected
        let json = r#"{"id":"s9","name":"S","email":"s@gbu.ac.in","role":"student"}"#;
        assert!(serde_json::from_str::<User>(json).is_err());
    }
}
