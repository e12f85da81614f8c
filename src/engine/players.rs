use crate::domain::{PlayerUid, User};

pub const UNKNOWN_PLAYER: &str = "Unknown";

/// Display name for a uid: name, then username, then "Unknown".
///
/// A uid missing from `players` is not an error.
pub fn resolve_player_name<'a>(players: &'a [User], uid: &PlayerUid) -> &'a str {
    players
        .iter()
        .find(|u| &u.uid == uid)
        .and_then(|u| {
            [u.name.as_str(), u.username.as_str()]
                .into_iter()
                .find(|s| !s.trim().is_empty())
        })
        .unwrap_or(UNKNOWN_PLAYER)
}
