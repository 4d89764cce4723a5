// crates/xcon-rs-diff/src/builder/users.rs

//! Contains builder functions for user admission lists and roles.

use crate::{model, types};

pub(super) fn build_model_allowed_users_list(
    public: &types::AllowedUsersList,
) -> model::AllowedUsersList {
    model::AllowedUsersList {
        target: public
            .targets
            .iter()
            .map(|target| model::users::Target {
                uri: Some(target.uri.clone()),
                method: Some(target.method.to_string()),
            })
            .collect(),
        persistent_list: public
            .persistent_list
            .as_ref()
            .map(|list| model::users::PersistentList {
                user: list
                    .users
                    .iter()
                    .map(|user| model::users::PersistentUser {
                        name: Some(user.name.clone()),
                        nickname: Some(user.nickname.clone()),
                        id: Some(user.id.clone()),
                        email: user.emails.clone(),
                    })
                    .collect(),
            }),
    }
}

pub(super) fn build_model_deny_users_list(public: &types::DenyUsersList) -> model::DenyUsersList {
    model::DenyUsersList {
        target: public
            .targets
            .iter()
            .map(|uri| model::users::DenyTarget {
                uri: Some(uri.clone()),
            })
            .collect(),
    }
}

pub(super) fn build_model_roles(public: &types::UserRoles) -> model::UserRoles {
    model::UserRoles {
        entry: public.entries.clone(),
    }
}
