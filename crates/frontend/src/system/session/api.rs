use contracts::shared::envelope::unwrap_item;
use contracts::system::session::UserProfile;

use crate::shared::api_utils::{self, cookie_value, document_cookies, ApiError};

/// Cookie the backend sets at login: URL-encoded JSON of the profile.
pub const PROFILE_COOKIE: &str = "user";
pub const PROFILE_ENDPOINT: &str = "/api/perfil";

/// Profile stored in the `user` cookie, if it is present and parses.
pub fn profile_from_cookies(cookies: &str) -> Option<UserProfile> {
    let raw = cookie_value(cookies, PROFILE_COOKIE)?;
    match serde_json::from_str(&raw) {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("unreadable profile cookie: {}", e);
            None
        }
    }
}

pub async fn fetch_profile() -> Result<UserProfile, ApiError> {
    let body = api_utils::get_json(PROFILE_ENDPOINT).await?;
    Ok(unwrap_item(body)?)
}

/// Cookie first; the backend is asked only when the cookie is missing.
pub async fn load_profile() -> Option<UserProfile> {
    if let Some(profile) = profile_from_cookies(&document_cookies()) {
        return Some(profile);
    }
    match fetch_profile().await {
        Ok(profile) => Some(profile),
        Err(e) => {
            log::warn!("no session profile: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_is_read_from_encoded_cookie() {
        let cookies = "XSRF-TOKEN=t; user=%7B%22id%22%3A3%2C%22nombre%22%3A%22Ana%22%2C%22id_rol%22%3A2%7D";
        let profile = profile_from_cookies(cookies).unwrap();
        assert_eq!(profile.id, 3);
        assert_eq!(profile.effective_role_id(), Some(2));
        assert_eq!(profile.display_name(), "Ana");
    }

    #[test]
    fn nested_role_is_accepted() {
        let cookies = "user=%7B%22id%22%3A3%2C%22rol%22%3A%7B%22id%22%3A5%7D%7D";
        assert_eq!(profile_from_cookies(cookies).unwrap().effective_role_id(), Some(5));
    }

    #[test]
    fn missing_or_broken_cookie_gives_none() {
        assert!(profile_from_cookies("theme=dark").is_none());
        assert!(profile_from_cookies("user=not-json").is_none());
    }
}
