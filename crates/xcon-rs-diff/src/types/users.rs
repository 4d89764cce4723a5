// crates/xcon-rs-diff/src/types/users.rs

//! User admission lists and roles.

use super::enums::JoinMethod;

/// Represents `<allowed-users-list>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AllowedUsersList {
    pub targets: Vec<Target>,
    pub persistent_list: Option<PersistentList>,
}

/// Represents `<target uri="..." method="..."/>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// `@uri` (Mandatory)
    pub uri: String,
    /// `@method` (Mandatory)
    pub method: JoinMethod,
}

impl Target {
    pub fn new(uri: impl Into<String>, method: JoinMethod) -> Self {
        Self {
            uri: uri.into(),
            method,
        }
    }
}

/// Represents `<persistent-list>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersistentList {
    pub users: Vec<PersistentUser>,
}

/// Represents a `<user>` of a `<persistent-list>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistentUser {
    /// `@name` (Mandatory)
    pub name: String,
    /// `@nickname` (Mandatory)
    pub nickname: String,
    /// `@id` (Mandatory)
    pub id: String,
    pub emails: Vec<String>,
}

/// Represents `<deny-users-list>`: the URIs of its `<target>` children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DenyUsersList {
    pub targets: Vec<String>,
}

/// Represents `<roles>`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserRoles {
    pub entries: Vec<String>,
}
