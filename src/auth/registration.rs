//! Account registration requests for CampusPass.
//!
//! A registration request carries the profile a new account would get.
//! The directory is read-only, so a successful registration reports the
//! would-be user without adding it anywhere; see the manager docs.

use uuid::Uuid;

use crate::auth::validation::{validate_registration_form, FormError};
use crate::user::{Role, RoleProfile, User};

/// Default department assigned to self-registered accounts.
const DEFAULT_DEPARTMENT: &str = "School of ICT";

/// Role-specific details collected by the registration form.
#[derive(Debug, Clone, PartialEq)]
pub enum RoleDetails {
    /// Student enrollment details.
    Student {
        /// Enrollment identifier.
        student_id: String,
        /// Course of study.
        course: String,
        /// Current semester number.
        semester: u32,
    },
    /// Teaching staff details.
    Teacher {
        /// Staff identifier.
        teacher_id: String,
        /// Designation.
        designation: String,
    },
    /// Administrators carry no extra form fields; their staff id is
    /// minted on completion.
    Admin,
}

/// Registration request data.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRequest {
    /// Display name.
    pub name: String,
    /// Email address (the future sign-in key).
    pub email: String,
    /// Role-specific detail fields.
    pub details: RoleDetails,
}

impl RegistrationRequest {
    /// Create a student registration request.
    pub fn student(
        name: impl Into<String>,
        email: impl Into<String>,
        student_id: impl Into<String>,
        course: impl Into<String>,
        semester: u32,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            details: RoleDetails::Student {
                student_id: student_id.into(),
                course: course.into(),
                semester,
            },
        }
    }

    /// Create a teacher registration request.
    pub fn teacher(
        name: impl Into<String>,
        email: impl Into<String>,
        teacher_id: impl Into<String>,
        designation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            details: RoleDetails::Teacher {
                teacher_id: teacher_id.into(),
                designation: designation.into(),
            },
        }
    }

    /// Create an admin registration request.
    pub fn admin(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            details: RoleDetails::Admin,
        }
    }

    /// The role this request registers for.
    pub fn role(&self) -> Role {
        match self.details {
            RoleDetails::Student { .. } => Role::Student,
            RoleDetails::Teacher { .. } => Role::Teacher,
            RoleDetails::Admin => Role::Admin,
        }
    }

    /// Validate the whole form: shared fields, then role details.
    pub fn validate(&self, password: &str, confirm_password: &str) -> Result<(), FormError> {
        validate_registration_form(&self.name, &self.email, password, confirm_password)?;

        match &self.details {
            RoleDetails::Student {
                student_id,
                course,
                semester,
            } => {
                if student_id.is_empty() || course.is_empty() || *semester == 0 {
                    return Err(FormError::MissingStudentDetails);
                }
            }
            RoleDetails::Teacher {
                teacher_id,
                designation,
            } => {
                if teacher_id.is_empty() || designation.is_empty() {
                    return Err(FormError::MissingTeacherDetails);
                }
            }
            RoleDetails::Admin => {}
        }

        Ok(())
    }

    /// Build the user record this request would create.
    ///
    /// Mints a fresh id, fills the default department, and starts
    /// teachers with no subjects and admins with no permissions, the
    /// same shape the registration form produces.
    pub fn into_user(self) -> User {
        let id = Uuid::new_v4().to_string();
        let profile = match self.details {
            RoleDetails::Student {
                student_id,
                course,
                semester,
            } => RoleProfile::Student {
                student_id,
                department: DEFAULT_DEPARTMENT.to_string(),
                course,
                semester,
            },
            RoleDetails::Teacher {
                teacher_id,
                designation,
            } => RoleProfile::Teacher {
                teacher_id,
                department: DEFAULT_DEPARTMENT.to_string(),
                subjects: Vec::new(),
                designation,
            },
            RoleDetails::Admin => RoleProfile::Admin {
                admin_id: format!("admin-{}", Uuid::new_v4()),
                permissions: Vec::new(),
            },
        };

        User {
            id,
            name: self.name,
            email: self.email,
            profile_image: None,
            profile,
        }
    }
}
