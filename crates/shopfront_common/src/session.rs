use serde::{Deserialize, Serialize};

use std::fmt::Display;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
/// A read-only snapshot of the signed-in user, supplied by the host
/// application's authentication layer.
///
/// Every field is optional: no session, a session without a role, and a
/// session without a token are all valid states that simply carry no
/// privilege. This library never mutates a session.
pub struct Session {
    /// Raw role identifier as issued by the authentication backend.
    ///
    /// The backend's set is open; identifiers not listed in [`Role`]
    /// carry no privilege here.
    pub role: Option<String>,
    /// Opaque bearer credential for the shop backend.
    pub access_token: Option<String>,
}

impl Session {
    /// A session for `role` carrying `token`.
    pub fn signed_in(role: Role, token: impl Into<String>) -> Self {
        Session {
            role: Some(role.as_str().to_owned()),
            access_token: Some(token.into()),
        }
    }

    /// The bearer token, if the session carries one.
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }
}

/// Role identifiers the navigation recognizes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Administers the company account.
    CompanyAdmin,
    /// Shops on behalf of the company.
    Employee,
}

impl Role {
    /// Parses a raw role identifier. Unknown identifiers map to `None`.
    ///
    /// Matching is exact; the backend issues lowercase identifiers.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "company_admin" => Some(Role::CompanyAdmin),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }

    /// The role carried by `session`, if it is one this library recognizes.
    pub fn from_session(session: &Session) -> Option<Self> {
        session.role.as_deref().and_then(Role::parse)
    }

    /// The wire identifier for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::CompanyAdmin => "company_admin",
            Role::Employee => "employee",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_known_identifiers() {
        assert_eq!(Role::parse("company_admin"), Some(Role::CompanyAdmin));
        assert_eq!(Role::parse("employee"), Some(Role::Employee));
    }

    #[test]
    fn test_role_parse_rejects_unknown_identifiers() {
        assert_eq!(Role::parse("customer"), None);
        assert_eq!(Role::parse(""), None);
        // Matching is case-sensitive
        assert_eq!(Role::parse("Employee"), None);
        assert_eq!(Role::parse("EMPLOYEE"), None);
    }

    #[test]
    fn test_role_from_session() {
        let session = Session::signed_in(Role::Employee, "tok");
        assert_eq!(Role::from_session(&session), Some(Role::Employee));

        let unknown = Session {
            role: Some("intern".into()),
            access_token: Some("tok".into()),
        };
        assert_eq!(Role::from_session(&unknown), None);

        assert_eq!(Role::from_session(&Session::default()), None);
    }

    #[test]
    fn test_session_deserializes_camel_case_payload() {
        let session: Session =
            serde_json::from_str(r#"{"role":"employee","accessToken":"abc123"}"#).unwrap();
        assert_eq!(session.role.as_deref(), Some("employee"));
        assert_eq!(session.access_token(), Some("abc123"));
    }

    #[test]
    fn test_session_tolerates_missing_fields() {
        let session: Session = serde_json::from_str("{}").unwrap();
        assert_eq!(session, Session::default());
        assert_eq!(session.access_token(), None);
    }

    #[test]
    fn test_role_round_trips_as_wire_identifier() {
        for role in [Role::CompanyAdmin, Role::Employee] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }
}
