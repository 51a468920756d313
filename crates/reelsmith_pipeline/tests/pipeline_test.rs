//! End-to-end pipeline tests: upload, caption, parse, cleanup.

mod test_utils;

use reelsmith_core::{MediaState, Platform};
use reelsmith_error::{CaptionErrorKind, MediaErrorKind, ReelsmithErrorKind};
use reelsmith_pipeline::{CaptionPipeline, RetryPolicy, UploadPolicy};
use std::path::Path;
use std::time::Duration;
use test_utils::{MALFORMED, MockClient, WELL_FORMED, temp_video};

fn quick_pipeline(client: MockClient) -> CaptionPipeline<MockClient> {
    let upload = UploadPolicy {
        poll_interval: Duration::from_millis(1),
        max_wait: Duration::from_secs(5),
    };
    let retry = RetryPolicy {
        max_attempts: 3,
        initial_backoff: Duration::from_millis(1),
        max_backoff: Duration::from_millis(10),
    };
    CaptionPipeline::with_policies(client, upload, retry)
}

#[tokio::test]
async fn run_produces_stripped_captions() -> anyhow::Result<()> {
    let client = MockClient::new_success(WELL_FORMED);
    let counters = client.clone();
    let (_dir, path) = temp_video();

    let bundle = quick_pipeline(client).run(&path).await?;

    assert_eq!(bundle.tiktok().caption(), "Great day! ");
    assert_eq!(bundle.instagram().caption(), "Sunsets  and chill");
    assert_eq!(bundle.get(Platform::TikTok).hashtags().len(), 10);
    assert_eq!(bundle.instagram().virality()[0], "#k");
    assert_eq!(counters.upload_count(), 1);
    assert_eq!(counters.generate_count(), 1);
    assert_eq!(counters.delete_count(), 1);
    Ok(())
}

#[tokio::test]
async fn remote_file_deleted_after_caption_failure() -> anyhow::Result<()> {
    let client = MockClient::new_success(MALFORMED);
    let counters = client.clone();
    let (_dir, path) = temp_video();

    let err = quick_pipeline(client)
        .run(&path)
        .await
        .expect_err("persistently malformed output should fail");

    match err.kind() {
        ReelsmithErrorKind::Caption(e) => {
            assert!(matches!(e.kind, CaptionErrorKind::ExhaustedRetries { .. }));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert_eq!(counters.generate_count(), 3);
    assert_eq!(counters.delete_count(), 1);
    Ok(())
}

#[tokio::test]
async fn missing_video_fails_without_remote_calls() -> anyhow::Result<()> {
    let client = MockClient::new_success(WELL_FORMED);
    let counters = client.clone();

    let err = quick_pipeline(client)
        .run(Path::new("/no/such/video.mp4"))
        .await
        .expect_err("missing video should fail");

    match err.kind() {
        ReelsmithErrorKind::Media(e) => {
            assert!(matches!(e.kind, MediaErrorKind::NotFound(_)));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert_eq!(counters.upload_count(), 0);
    assert_eq!(counters.generate_count(), 0);
    assert_eq!(counters.delete_count(), 0);
    Ok(())
}

#[tokio::test]
async fn upload_failure_skips_generation() -> anyhow::Result<()> {
    let client = MockClient::new_success(WELL_FORMED)
        .with_upload_state(MediaState::Pending)
        .with_poll_states(vec![MediaState::Failed]);
    let counters = client.clone();
    let (_dir, path) = temp_video();

    let err = quick_pipeline(client)
        .run(&path)
        .await
        .expect_err("failed processing should fail the run");

    match err.kind() {
        ReelsmithErrorKind::Media(e) => {
            assert!(matches!(e.kind, MediaErrorKind::UploadFailed(_)));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert_eq!(counters.generate_count(), 0);
    assert_eq!(counters.delete_count(), 1);
    Ok(())
}

#[tokio::test]
async fn delete_failure_does_not_mask_success() -> anyhow::Result<()> {
    let client = MockClient::new_success(WELL_FORMED).with_failing_delete();
    let counters = client.clone();
    let (_dir, path) = temp_video();

    let bundle = quick_pipeline(client).run(&path).await?;

    assert_eq!(bundle.tiktok().caption(), "Great day! ");
    assert_eq!(counters.delete_count(), 1);
    Ok(())
}
