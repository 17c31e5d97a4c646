use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity provider that produced a profile.
///
/// `None` is the sentinel for "no session"; it never appears on a profile
/// returned by a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    Google,
    Kakao,
    Naver,
    #[default]
    None,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Platform::Google => "GOOGLE",
            Platform::Kakao => "KAKAO",
            Platform::Naver => "NAVER",
            Platform::None => "NONE",
        })
    }
}

/// Normalized identity record shared by all three providers.
///
/// Missing vendor fields map to an empty string for `id`/`name`/`email` and
/// to `None` for `profile_image_url`. Consumers rely on this asymmetry, so
/// adapters must not substitute one for the other.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub profile_image_url: Option<String>,
    pub platform: Platform,
}
