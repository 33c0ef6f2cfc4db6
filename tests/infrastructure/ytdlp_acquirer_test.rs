use tavor::application::ports::{AcquisitionError, MediaAcquirer};
use tavor::infrastructure::media::YtDlpAcquirer;

#[test]
fn given_missing_work_dir_when_constructing_then_creates_it() {
    let dir = tempfile::TempDir::new().unwrap();
    let work_dir = dir.path().join("nested").join("audio");

    let _acquirer = YtDlpAcquirer::new("yt-dlp".to_string(), work_dir.clone()).unwrap();

    assert!(work_dir.is_dir());
}

#[tokio::test]
async fn given_missing_binary_when_acquiring_then_tool_unavailable() {
    let dir = tempfile::TempDir::new().unwrap();
    let acquirer = YtDlpAcquirer::new(
        "definitely-not-a-real-binary-xyz".to_string(),
        dir.path().to_path_buf(),
    )
    .unwrap();

    let result = acquirer
        .acquire("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
        .await;

    assert!(matches!(result, Err(AcquisitionError::ToolUnavailable(_))));
}
