//! Contains model structs for user admission elements: `<allowed-users-list>`,
//! `<deny-users-list>` and `<roles>`.

use serde::{Deserialize, Serialize};

/// Represents `<allowed-users-list>` (`allowed-users-list-type`).
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct AllowedUsersList {
    #[serde(rename = "target", default, skip_serializing_if = "Vec::is_empty")]
    pub target: Vec<Target>,

    #[serde(
        rename = "persistent-list",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub persistent_list: Option<PersistentList>,
}

/// Represents `<target uri="..." method="..."/>` (`target-type`).
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Target {
    #[serde(rename = "@uri", default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    #[serde(rename = "@method", default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

/// Represents `<persistent-list>`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct PersistentList {
    #[serde(rename = "user", default, skip_serializing_if = "Vec::is_empty")]
    pub user: Vec<PersistentUser>,
}

/// Represents `<user name="..." nickname="..." id="...">` inside `<persistent-list>`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct PersistentUser {
    #[serde(rename = "@name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "@nickname", default, skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,

    #[serde(rename = "@id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(rename = "email", default, skip_serializing_if = "Vec::is_empty")]
    pub email: Vec<String>,
}

/// Represents `<deny-users-list>` (`deny-user-list-type`).
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct DenyUsersList {
    #[serde(rename = "target", default, skip_serializing_if = "Vec::is_empty")]
    pub target: Vec<DenyTarget>,
}

/// Represents `<target uri="..."/>` inside `<deny-users-list>`.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct DenyTarget {
    #[serde(rename = "@uri", default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

/// Represents `<roles>` (`user-roles-type`).
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct UserRoles {
    #[serde(rename = "entry", default, skip_serializing_if = "Vec::is_empty")]
    pub entry: Vec<String>,
}
