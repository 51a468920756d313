//! Target platform enumeration.

use serde::{Deserialize, Serialize};

/// Social platform a caption set targets.
///
/// # Examples
///
/// ```
/// use reelsmith_core::Platform;
/// use strum::IntoEnumIterator;
///
/// assert_eq!(format!("{}", Platform::TikTok), "tiktok");
/// assert_eq!(Platform::iter().count(), 2);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// TikTok short-form video.
    #[display("tiktok")]
    TikTok,
    /// Instagram Reels.
    #[display("instagram")]
    Instagram,
}

impl Platform {
    /// Key used for this platform in model response payloads.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::TikTok => "tiktok",
            Platform::Instagram => "instagram",
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tiktok" => Ok(Platform::TikTok),
            "instagram" => Ok(Platform::Instagram),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}
