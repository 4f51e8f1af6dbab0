/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Demo roles the console can be viewed as
/// Drives navigation visibility and which identity the mock API returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    TenantOwner,
    User,
}

impl Role {
    pub const ALL: &'static [Role] = &[Role::SuperAdmin, Role::TenantOwner, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::TenantOwner => "tenant_owner",
            Role::User => "user",
        }
    }

    /// Human label shown in the role switcher
    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Platform Admin",
            Role::TenantOwner => "Tenant Owner",
            Role::User => "Member",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "super_admin" => Ok(Role::SuperAdmin),
            "tenant_owner" => Ok(Role::TenantOwner),
            "user" => Ok(Role::User),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), *role);
        }
    }

    #[test]
    fn role_serializes_snake_case() {
        let v = serde_json::to_value(Role::SuperAdmin).unwrap();
        assert_eq!(v, serde_json::json!("super_admin"));
    }
}
