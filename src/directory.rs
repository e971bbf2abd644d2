//! Identity directory for CampusPass.
//!
//! The directory is the lookup source of known user records, keyed by
//! email. It is read-only at runtime; a real deployment would back this
//! trait with an actual user service without touching the auth manager.

use crate::user::User;

/// Lookup of known users for sign-in verification.
pub trait IdentityDirectory: Send + Sync {
    /// Find a user by email. Case-sensitive exact match, no normalization.
    fn find_by_email(&self, email: &str) -> Option<User>;

    /// Check whether an email is already registered.
    fn email_exists(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }
}

/// In-memory directory over a fixed set of users.
///
/// Contents are fixed at construction; registration never writes back.
#[derive(Debug, Clone)]
pub struct SeedDirectory {
    users: Vec<User>,
}

impl SeedDirectory {
    /// Create a directory from the given users.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The demo campus seed: the well-known student/teacher/admin
    /// accounts plus a few extra records per role.
    pub fn campus_demo() -> Self {
        let ict = "School of ICT";
        Self::new(vec![
            User::student(
                "s1",
                "Rahul Sharma",
                "student@gbu.ac.in",
                "20ICT1001",
                ict,
                "B.Tech",
                5,
            ),
            User::student(
                "s2",
                "Neha Singh",
                "neha@gbu.ac.in",
                "20ICT1002",
                ict,
                "B.Tech",
                5,
            ),
            User::student(
                "s3",
                "Amit Kumar",
                "amit@gbu.ac.in",
                "20ICT1003",
                ict,
                "B.Tech",
                5,
            ),
            User::teacher(
                "t1",
                "Dr. Priya Gupta",
                "teacher@gbu.ac.in",
                "ICT-F-001",
                ict,
                vec![
                    "Data Structures".to_string(),
                    "Algorithms".to_string(),
                    "Database Systems".to_string(),
                ],
                "Associate Professor",
            ),
            User::teacher(
                "t2",
                "Dr. Rajesh Mishra",
                "rajesh@gbu.ac.in",
                "ICT-F-002",
                ict,
                vec![
                    "Computer Networks".to_string(),
                    "Operating Systems".to_string(),
                    "System Programming".to_string(),
                ],
                "Assistant Professor",
            ),
            User::admin(
                "a1",
                "Admin User",
                "admin@gbu.ac.in",
                "ADM-001",
                vec!["manage_users".to_string(), "manage_notices".to_string()],
            ),
        ])
    }

    /// Number of records in the directory.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl IdentityDirectory for SeedDirectory {
    fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.iter().find(|u| u.email == email).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Role;

    #[test]
    fn test_find_by_email_known() {
        let dir = SeedDirectory::campus_demo();

        let user = dir.find_by_email("student@gbu.ac.in").unwrap();
        assert_eq!(user.id, "s1");
        assert_eq!(user.role(), Role::Student);

        let user = dir.find_by_email("teacher@gbu.ac.in").unwrap();
        assert_eq!(user.role(), Role::Teacher);

        let user = dir.find_by_email("admin@gbu.ac.in").unwrap();
        assert_eq!(user.role(), Role::Admin);
    }

    #[test]
    fn test_find_by_email_unknown() {
        let dir = SeedDirectory::campus_demo();
        assert!(dir.find_by_email("nobody@gbu.ac.in").is_none());
    }

    #[test]
    fn test_find_by_email_is_case_sensitive() {
        let dir = SeedDirectory::campus_demo();
        assert!(dir.find_by_email("Student@gbu.ac.in").is_none());
        assert!(dir.find_by_email("STUDENT@GBU.AC.IN").is_none());
    }

    #[test]
    fn test_email_exists() {
        let dir = SeedDirectory::campus_demo();
        assert!(dir.email_exists("neha@gbu.ac.in"));
        assert!(!dir.email_exists("ghost@gbu.ac.in"));
    }

    #[test]
    fn test_empty_directory() {
        let dir = SeedDirectory::new(vec![]);
        assert!(dir.is_empty());
        assert_eq!(dir.len(), 0);
        assert!(dir.find_by_email("student@gbu.ac.in").is_none());
    }
}
