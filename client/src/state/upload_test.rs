use super::*;

fn statuses(queue: &UploadQueue) -> Vec<UploadStatus> {
    queue.items.iter().map(|i| i.status.clone()).collect()
}

// =============================================================
// Happy path
// =============================================================

#[test]
fn files_upload_one_at_a_time_in_order() {
    let mut queue = UploadQueue::new(["a.jpg", "b.jpg"]);
    assert_eq!(queue.next(), Some(0));
    queue.start(0);
    assert!(queue.is_busy());
    assert_eq!(queue.next(), None);

    queue.complete(0);
    assert_eq!(queue.next(), Some(1));
    queue.start(1);
    queue.complete(1);

    assert_eq!(queue.next(), None);
    assert!(queue.is_finished());
    assert_eq!(queue.done_count(), 2);
    assert_eq!(queue.failure(), None);
}

#[test]
fn empty_queue_is_finished() {
    let queue = UploadQueue::new(Vec::<String>::new());
    assert!(queue.is_finished());
    assert_eq!(queue.next(), None);
}

// =============================================================
// Failure
// =============================================================

#[test]
fn failure_skips_remaining_files() {
    let mut queue = UploadQueue::new(["a.jpg", "b.jpg", "c.jpg"]);
    queue.start(0);
    queue.complete(0);
    queue.start(1);
    queue.fail(1, NO_FILE_INFO);

    assert_eq!(
        statuses(&queue),
        vec![UploadStatus::Done, UploadStatus::Failed(NO_FILE_INFO.to_owned()), UploadStatus::Skipped]
    );
    assert_eq!(queue.next(), None);
    assert!(queue.is_finished());
    assert_eq!(queue.failure(), Some(NO_FILE_INFO));
}

#[test]
fn start_ignores_non_pending_items() {
    let mut queue = UploadQueue::new(["a.jpg"]);
    queue.start(0);
    queue.complete(0);
    queue.start(0);
    assert_eq!(statuses(&queue), vec![UploadStatus::Done]);
    queue.start(5);
}

#[test]
fn status_labels() {
    assert_eq!(UploadStatus::Pending.label(), "pending");
    assert_eq!(UploadStatus::Failed("boom".into()).label(), "boom");
}

// =============================================================
// Progress
// =============================================================

#[test]
fn progress_counts_the_file_in_flight() {
    let mut queue = UploadQueue::new(["a.jpg", "b.jpg", "c.jpg"]);
    assert_eq!(UploadQueue::default().progress_label(), None);
    assert_eq!(queue.progress_label().as_deref(), Some("Uploading 1 of 3..."));

    queue.start(0);
    queue.complete(0);
    queue.start(1);
    assert_eq!(queue.progress_label().as_deref(), Some("Uploading 2 of 3..."));
}

#[test]
fn progress_after_failure_reports_only_finished_uploads() {
    let mut queue = UploadQueue::new(["a.jpg", "b.jpg", "c.jpg"]);
    queue.start(0);
    queue.complete(0);
    queue.start(1);
    queue.fail(1, "HTTP 500");
    assert_eq!(queue.progress_label().as_deref(), Some("1 of 3 uploaded"));
}
