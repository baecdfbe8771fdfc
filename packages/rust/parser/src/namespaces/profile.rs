//! The `profile:*` vocabulary.

use metaparser_shared::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProfileKey {
    FirstName,
    LastName,
    Username,
    Gender,
}

pub(crate) fn apply(key: ProfileKey, content: &str, profile: &mut Profile) {
    let field = match key {
        ProfileKey::FirstName => &mut profile.first_name,
        ProfileKey::LastName => &mut profile.last_name,
        ProfileKey::Username => &mut profile.username,
        ProfileKey::Gender => &mut profile.gender,
    };
    content.clone_into(field);
}
