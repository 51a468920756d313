//! Upload workflow tests against a mock media store.

mod test_utils;

use reelsmith_core::MediaState;
use reelsmith_error::{MediaErrorKind, ReelsmithErrorKind};
use reelsmith_pipeline::{UploadPolicy, upload_media};
use std::path::Path;
use std::time::Duration;
use test_utils::{MockClient, temp_video};

fn quick_policy() -> UploadPolicy {
    UploadPolicy {
        poll_interval: Duration::from_secs(1),
        max_wait: Duration::from_secs(30),
    }
}

#[tokio::test]
async fn missing_path_fails_before_any_remote_call() -> anyhow::Result<()> {
    let client = MockClient::new_success("unused");
    let path = Path::new("/no/such/video.mp4");

    let err = upload_media(&client, path, quick_policy())
        .await
        .expect_err("missing path should fail");

    match err.kind() {
        ReelsmithErrorKind::Media(e) => {
            assert!(matches!(e.kind, MediaErrorKind::NotFound(_)));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert_eq!(client.upload_count(), 0);
    assert_eq!(client.delete_count(), 0);
    Ok(())
}

#[tokio::test]
async fn directory_path_is_invalid_input() -> anyhow::Result<()> {
    let client = MockClient::new_success("unused");
    let dir = tempfile::tempdir()?;

    let err = upload_media(&client, dir.path(), quick_policy())
        .await
        .expect_err("directory should be rejected");

    match err.kind() {
        ReelsmithErrorKind::Media(e) => {
            assert!(matches!(e.kind, MediaErrorKind::InvalidInput(_)));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert_eq!(client.upload_count(), 0);
    Ok(())
}

#[tokio::test]
async fn immediately_ready_upload_skips_polling() -> anyhow::Result<()> {
    let client = MockClient::new_success("unused");
    let (_dir, path) = temp_video();

    let handle = upload_media(&client, &path, quick_policy()).await?;

    assert_eq!(*handle.state(), MediaState::Ready);
    assert_eq!(client.upload_count(), 1);
    assert_eq!(client.status_count(), 0);
    assert_eq!(client.delete_count(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn pending_then_ready_polls_until_active() -> anyhow::Result<()> {
    let client = MockClient::new_success("unused")
        .with_upload_state(MediaState::Pending)
        .with_poll_states(vec![MediaState::Pending, MediaState::Ready]);
    let (_dir, path) = temp_video();

    let handle = upload_media(&client, &path, quick_policy()).await?;

    assert_eq!(*handle.state(), MediaState::Ready);
    assert_eq!(client.status_count(), 2);
    assert_eq!(client.delete_count(), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn failed_processing_deletes_and_reports_state() -> anyhow::Result<()> {
    let client = MockClient::new_success("unused")
        .with_upload_state(MediaState::Pending)
        .with_poll_states(vec![MediaState::Failed]);
    let (_dir, path) = temp_video();

    let err = upload_media(&client, &path, quick_policy())
        .await
        .expect_err("failed processing should surface");

    match err.kind() {
        ReelsmithErrorKind::Media(e) => {
            assert!(matches!(e.kind, MediaErrorKind::UploadFailed(_)));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert_eq!(client.status_count(), 1);
    assert_eq!(client.delete_count(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn stuck_processing_times_out() -> anyhow::Result<()> {
    let client = MockClient::new_success("unused")
        .with_upload_state(MediaState::Pending)
        .with_poll_states(vec![MediaState::Pending]);
    let (_dir, path) = temp_video();
    let policy = UploadPolicy {
        poll_interval: Duration::from_secs(1),
        max_wait: Duration::from_secs(3),
    };

    let err = upload_media(&client, &path, policy)
        .await
        .expect_err("stuck file should time out");

    match err.kind() {
        ReelsmithErrorKind::Media(e) => {
            assert!(matches!(
                e.kind,
                MediaErrorKind::UploadTimeout { waited_secs: 3 }
            ));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert_eq!(client.delete_count(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn delete_failure_does_not_mask_upload_error() -> anyhow::Result<()> {
    let client = MockClient::new_success("unused")
        .with_upload_state(MediaState::Pending)
        .with_poll_states(vec![MediaState::Failed])
        .with_failing_delete();
    let (_dir, path) = temp_video();

    let err = upload_media(&client, &path, quick_policy())
        .await
        .expect_err("failed processing should surface");

    // The original failure wins even when cleanup also fails
    match err.kind() {
        ReelsmithErrorKind::Media(e) => {
            assert!(matches!(e.kind, MediaErrorKind::UploadFailed(_)));
        }
        other => panic!("unexpected error kind: {other:?}"),
    }
    assert_eq!(client.delete_count(), 1);
    Ok(())
}
