//! Stress the per-target atomic toggle: concurrent toggles from distinct
//! viewers must never let the counter and the membership set diverge.

use std::sync::Arc;

use url::Url;

use reelbite_model::{Creator, VideoItem, ViewerID};
use reelbite_server::engagement::EngagementLedger;

fn seeded_ledger() -> (Arc<EngagementLedger>, reelbite_model::VideoID) {
    let ledger = Arc::new(EngagementLedger::new());
    let creator = Creator::new("Pasta Lab", "lab@example.com", None);
    let creator_id = ledger.insert_creator(creator);
    let video_id = ledger.insert_video(VideoItem::new(
        "carbonara",
        None,
        Url::parse("https://cdn.example.com/v/c.mp4").unwrap(),
        creator_id,
    ));
    (ledger, video_id)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn n_concurrent_viewers_like_once_each() {
    const VIEWERS: usize = 64;
    let (ledger, video_id) = seeded_ledger();

    let mut handles = Vec::with_capacity(VIEWERS);
    for _ in 0..VIEWERS {
        let ledger = Arc::clone(&ledger);
        handles.push(tokio::spawn(async move {
            ledger.toggle_like(ViewerID::new(), video_id).unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = ledger.like_snapshot(video_id).unwrap();
    assert_eq!(snapshot.count, VIEWERS as u64);
    assert_eq!(snapshot.members.len(), VIEWERS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_toggle_pairs_cancel_out() {
    // Every viewer toggles twice; regardless of interleaving the final
    // state must be empty with a zero counter.
    const VIEWERS: usize = 32;
    let (ledger, video_id) = seeded_ledger();

    let mut handles = Vec::with_capacity(VIEWERS);
    for _ in 0..VIEWERS {
        let ledger = Arc::clone(&ledger);
        handles.push(tokio::spawn(async move {
            let viewer = ViewerID::new();
            ledger.toggle_like(viewer, video_id).unwrap();
            ledger.toggle_like(viewer, video_id).unwrap();
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = ledger.like_snapshot(video_id).unwrap();
    assert_eq!(snapshot.count, 0);
    assert!(snapshot.members.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn counter_equals_cardinality_under_mixed_traffic() {
    const VIEWERS: usize = 48;
    let (ledger, video_id) = seeded_ledger();

    let mut handles = Vec::with_capacity(VIEWERS);
    for n in 0..VIEWERS {
        let ledger = Arc::clone(&ledger);
        handles.push(tokio::spawn(async move {
            let viewer = ViewerID::new();
            // Odd-indexed viewers end present, even-indexed end absent.
            let toggles = if n % 2 == 0 { 2 } else { 3 };
            for _ in 0..toggles {
                ledger.toggle_like(viewer, video_id).unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = ledger.like_snapshot(video_id).unwrap();
    assert_eq!(snapshot.count, snapshot.members.len() as u64);
    assert_eq!(snapshot.count, (VIEWERS / 2) as u64);
}
