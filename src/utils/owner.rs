use std::collections::HashMap;

/// Shown when an id has no matching account.
pub const UNKNOWN: &str = "-";

/// Translates user and group ids to names, remembering every answer.
#[derive(Debug, Default)]
pub struct OwnerCache {
    users: HashMap<u32, Option<String>>,
    groups: HashMap<u32, Option<String>>,
}

impl OwnerCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the user with `uid`, if there is one.
    pub fn user(&mut self, uid: u32) -> Option<&str> {
        self.users
            .entry(uid)
            .or_insert_with(|| {
                log::debug!("looking up user {uid}");
                users::get_user_by_uid(uid).map(|user| user.name().to_string_lossy().into_owned())
            })
            .as_deref()
    }

    /// Name of the group with `gid`, if there is one.
    pub fn group(&mut self, gid: u32) -> Option<&str> {
        self.groups
            .entry(gid)
            .or_insert_with(|| {
                log::debug!("looking up group {gid}");
                users::get_group_by_gid(gid).map(|group| group.name().to_string_lossy().into_owned())
            })
            .as_deref()
    }

    /// User name for the `Owner` column.
    pub fn owner_label(&mut self, uid: u32) -> String {
        self.user(uid).unwrap_or(UNKNOWN).to_string()
    }
}
