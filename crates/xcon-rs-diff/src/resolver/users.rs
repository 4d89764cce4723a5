// crates/xcon-rs-diff/src/resolver/users.rs

//! Resolves user admission lists and roles.

use super::utils::required_attribute;
use crate::error::XconError;
use crate::{model, types};

pub(super) fn resolve_allowed_users_list(
    model: &model::AllowedUsersList,
) -> Result<types::AllowedUsersList, XconError> {
    let targets = model
        .target
        .iter()
        .map(|target| {
            Ok::<_, XconError>(types::Target {
                uri: required_attribute(target.uri.as_deref(), "target", "uri")?.to_string(),
                method: required_attribute(target.method.as_deref(), "target", "method")?
                    .parse()?,
            })
        })
        .collect::<Result<Vec<_>, XconError>>()?;

    let persistent_list = model
        .persistent_list
        .as_ref()
        .map(|list| {
            let users = list
                .user
                .iter()
                .map(resolve_persistent_user)
                .collect::<Result<Vec<_>, XconError>>()?;
            Ok::<_, XconError>(types::PersistentList { users })
        })
        .transpose()?;

    Ok(types::AllowedUsersList {
        targets,
        persistent_list,
    })
}

fn resolve_persistent_user(
    model: &model::users::PersistentUser,
) -> Result<types::PersistentUser, XconError> {
    Ok(types::PersistentUser {
        name: required_attribute(model.name.as_deref(), "user", "name")?.to_string(),
        nickname: required_attribute(model.nickname.as_deref(), "user", "nickname")?.to_string(),
        id: required_attribute(model.id.as_deref(), "user", "id")?.to_string(),
        emails: model.email.iter().map(|e| e.trim().to_string()).collect(),
    })
}

pub(super) fn resolve_deny_users_list(
    model: &model::DenyUsersList,
) -> Result<types::DenyUsersList, XconError> {
    let targets = model
        .target
        .iter()
        .map(|t| {
            let uri = required_attribute(t.uri.as_deref(), "target", "uri")?;
            Ok::<_, XconError>(uri.to_string())
        })
        .collect::<Result<Vec<_>, XconError>>()?;
    Ok(types::DenyUsersList { targets })
}

pub(super) fn resolve_roles(model: &model::UserRoles) -> types::UserRoles {
    types::UserRoles {
        entries: model.entry.iter().map(|e| e.trim().to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::users::{DenyTarget, PersistentList, PersistentUser, Target};

    #[test]
    fn test_resolve_allowed_users_list() {
        let model = model::AllowedUsersList {
            target: vec![Target {
                uri: Some("sip:bob@example.com".into()),
                method: Some("dial-out".into()),
            }],
            persistent_list: Some(PersistentList {
                user: vec![PersistentUser {
                    name: Some("sip:alice@example.com".into()),
                    nickname: Some("alice".into()),
                    id: Some("a1".into()),
                    email: vec!["alice@example.com".into()],
                }],
            }),
        };

        let list = resolve_allowed_users_list(&model).unwrap();

        assert_eq!(list.targets[0].method, types::JoinMethod::DialOut);
        let users = &list.persistent_list.unwrap().users;
        assert_eq!(users[0].nickname, "alice");
        assert_eq!(users[0].emails, vec!["alice@example.com".to_string()]);
    }

    #[test]
    fn test_target_requires_method() {
        let model = model::AllowedUsersList {
            target: vec![Target {
                uri: Some("sip:bob@example.com".into()),
                method: None,
            }],
            persistent_list: None,
        };
        assert!(matches!(
            resolve_allowed_users_list(&model),
            Err(XconError::MissingAttribute {
                element: "target",
                attribute: "method"
            })
        ));
    }

    #[test]
    fn test_resolve_deny_users_list() {
        let model = model::DenyUsersList {
            target: vec![DenyTarget {
                uri: Some("sip:mallory@example.com".into()),
            }],
        };
        let list = resolve_deny_users_list(&model).unwrap();
        assert_eq!(list.targets, vec!["sip:mallory@example.com".to_string()]);
    }
}
