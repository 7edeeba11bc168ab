use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Marketplace role. Closed set: a session is either a customer
/// booking billboards or an owner listing them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Owner,
}

/// Session-scoped user. Created at sign-in, never updated, destroyed
/// at sign-out; not a durable account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn new(name: String, email: String, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            role,
        }
    }

    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }

    pub fn is_customer(&self) -> bool {
        self.role == Role::Customer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        let user = User::new("Jane Doe".to_string(), "jane@example.com".to_string(), Role::Owner);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["role"], "owner");
        assert_eq!(json["name"], "Jane Doe");
    }

    #[test]
    fn test_role_round_trip() {
        let role: Role = serde_json::from_str("\"customer\"").unwrap();
        assert_eq!(role, Role::Customer);
        assert!(!User::new("a".into(), "b".into(), role).is_owner());
    }
}
