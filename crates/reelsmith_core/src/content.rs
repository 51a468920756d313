//! Parsed caption content types.

use crate::Platform;
use serde::{Deserialize, Serialize};

/// Caption and hashtag sets for a single platform.
///
/// The caption holds no inline hashtags; tags live in `virality` and
/// `relevance` so callers control placement.
///
/// # Examples
///
/// ```
/// use reelsmith_core::PlatformContent;
///
/// let content = PlatformContent::new(
///     "Sunset over the bay".to_string(),
///     vec!["#fyp".to_string()],
///     vec!["#sunset".to_string()],
/// );
///
/// assert_eq!(content.caption(), "Sunset over the bay");
/// assert_eq!(content.virality().len(), 1);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
    derive_builder::Builder,
)]
pub struct PlatformContent {
    /// Caption text with inline hashtags removed.
    caption: String,
    /// Hashtags chosen to maximize reach.
    virality: Vec<String>,
    /// Hashtags describing the video content.
    relevance: Vec<String>,
}

impl PlatformContent {
    /// All hashtags for this platform, virality first.
    pub fn hashtags(&self) -> Vec<String> {
        let mut tags = self.virality.clone();
        tags.extend(self.relevance.iter().cloned());
        tags
    }
}

/// Parsed captions for every supported platform.
///
/// # Examples
///
/// ```
/// use reelsmith_core::{CaptionBundle, Platform, PlatformContent};
///
/// let tiktok = PlatformContent::new("A".to_string(), vec![], vec![]);
/// let instagram = PlatformContent::new("B".to_string(), vec![], vec![]);
/// let bundle = CaptionBundle::new(tiktok, instagram);
///
/// assert_eq!(bundle.get(Platform::Instagram).caption(), "B");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_getters::Getters,
)]
pub struct CaptionBundle {
    /// Content for TikTok.
    tiktok: PlatformContent,
    /// Content for Instagram Reels.
    instagram: PlatformContent,
}

impl CaptionBundle {
    /// Content for the given platform.
    pub fn get(&self, platform: Platform) -> &PlatformContent {
        match platform {
            Platform::TikTok => &self.tiktok,
            Platform::Instagram => &self.instagram,
        }
    }
}
