//! Prompt sent with every caption request.

/// Instructions given to the model alongside the uploaded video.
///
/// The wording can evolve, but the contract is load-bearing: the model
/// must answer with a JSON array holding exactly one object keyed by
/// `tiktok` and `instagram`, each with a hashtag-free `caption` plus
/// five `virality` and five `relevance` hashtags. Validation in this
/// crate enforces that shape.
pub const CAPTION_PROMPT: &str = "You are an expert in understanding the contents of a video \
based on visual features. You are also an expert at creating social media captions based on \
the video you see. Provide two captions for this video; one that is optimized to perform well \
and go viral on TikTok, and the other to do the same on Instagram Reels. Do not include \
hashtags in the captions. Provide 10 hashtags that would work well to push this video to what \
you believe its target audience is, striking a balance between going viral and staying \
relevant to the video's content. Of the 10, provide 5 tailored more towards virality, and 5 \
tailored more towards relevance. Return the results as a string formatted as \
'[{\"tiktok\": {\"caption\": caption, \"virality\": [list of hashtags], \"relevance\": [list \
of hashtags]}, \"instagram\": {\"caption\": caption, \"virality\": [list of hashtags], \
\"relevance\": [list of hashtags]}}]'.";
