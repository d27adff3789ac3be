//! Roles granted by the backend.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Role names known to the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Regular customer.
    #[default]
    User,
    /// Store administrator; may add, modify and delete products.
    Admin,
}

impl Role {
    /// Get role as the backend spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}

/// Role set as carried by a session. Unknown role names are kept verbatim.
pub type Roles = BTreeSet<String>;

/// Build a role set from names.
pub fn roles<I, S>(names: I) -> Roles
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

/// True iff `held` and `required` share at least one role.
pub fn intersects<S: AsRef<str>>(held: &Roles, required: &[S]) -> bool {
    required.iter().any(|r| held.contains(r.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_names() {
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(Role::User.to_string(), "USER");
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_intersection() {
        let held = roles(["USER", "AUDITOR"]);
        assert!(intersects(&held, &["ADMIN", "AUDITOR"]));
        assert!(!intersects(&held, &[Role::Admin.as_str()]));
        assert!(!intersects::<&str>(&held, &[]));
        assert!(!intersects(&Roles::new(), &["USER"]));
    }
}
