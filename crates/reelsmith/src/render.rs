//! Incremental terminal rendering of caption bundles.
//!
//! Each platform section streams as chunks: caption words first, then
//! virality hashtags, then relevance hashtags, one chunk every 80 ms.

use futures_util::StreamExt;
use futures_util::stream::Stream;
use reelsmith_core::{CaptionBundle, Platform, PlatformContent};
use std::pin::Pin;
use std::time::Duration;
use strum::IntoEnumIterator;

/// Delay between rendered chunks.
const CHUNK_DELAY: Duration = Duration::from_millis(80);

/// Section heading shown above each platform's content.
fn heading(platform: Platform) -> &'static str {
    match platform {
        Platform::TikTok => "TikTok Tailored",
        Platform::Instagram => "Instagram Tailored",
    }
}

/// Hashtags render with exactly one leading `#`.
fn display_tag(tag: &str) -> String {
    if tag.starts_with('#') {
        format!("{tag} ")
    } else {
        format!("#{tag} ")
    }
}

/// Chunk stream for one platform section.
///
/// Caption words come first, then the virality tags, then the relevance
/// tags, with a line break between groups.
pub fn content_stream(content: &PlatformContent) -> Pin<Box<dyn Stream<Item = String> + Send>> {
    let mut chunks: Vec<String> = content
        .caption()
        .split_whitespace()
        .map(|word| format!("{word} "))
        .collect();
    chunks.push("\n".to_string());
    chunks.extend(content.virality().iter().map(|tag| display_tag(tag)));
    chunks.push("\n".to_string());
    chunks.extend(content.relevance().iter().map(|tag| display_tag(tag)));

    Box::pin(async_stream::stream! {
        for chunk in chunks {
            tokio::time::sleep(CHUNK_DELAY).await;
            yield chunk;
        }
    })
}

/// Stream one platform section to stdout.
pub async fn render_platform(platform: Platform, content: &PlatformContent) {
    use std::io::Write;

    println!("\n== {} ==", heading(platform));
    let mut stream = content_stream(content);
    while let Some(chunk) = stream.next().await {
        print!("{chunk}");
        let _ = std::io::stdout().flush();
    }
    println!();
}

/// Stream every platform section to stdout.
pub async fn render_bundle(bundle: &CaptionBundle) {
    for platform in Platform::iter() {
        render_platform(platform, bundle.get(platform)).await;
    }
}
