use super::*;
use crate::{composition::config::promo_composition, render::sink::InMemorySink};

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn chunk_size_zero_is_one() {
    assert_eq!(normalized_chunk_size(0), 1);
    assert_eq!(normalized_chunk_size(64), 64);
}

#[test]
fn zero_threads_is_rejected() {
    let err = build_thread_pool(Some(0)).err().unwrap();
    assert!(err.to_string().contains("must be >= 1"));
    assert!(build_thread_pool(Some(2)).is_ok());
}

#[test]
fn render_frame_matches_evaluator() {
    let comp = promo_composition().unwrap();
    let a = render_frame(&comp, FrameIndex(200)).unwrap();
    let b = Evaluator::eval_frame(&comp, FrameIndex(200)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn sequential_render_counts_chunks() {
    let comp = promo_composition().unwrap();
    let threading = RenderThreading {
        chunk_size: 4,
        ..RenderThreading::default()
    };
    let (frames, stats) = render_frames(&comp, range(140, 150), &threading).unwrap();
    assert_eq!(frames.len(), 10);
    assert_eq!(frames[0].frame, FrameIndex(140));
    assert_eq!(frames[9].frame, FrameIndex(149));
    assert_eq!(
        stats,
        RenderStats {
            frames_total: 10,
            frames_rendered: 10,
            chunks: 3,
        }
    );
}

#[test]
fn parallel_matches_sequential() {
    let comp = promo_composition().unwrap();
    let seq = RenderThreading::default();
    let par = RenderThreading {
        parallel: true,
        chunk_size: 7,
        threads: Some(3),
    };
    let (a, _) = render_frames(&comp, range(160, 220), &seq).unwrap();
    let (b, stats) = render_frames(&comp, range(160, 220), &par).unwrap();
    assert_eq!(a, b);
    assert_eq!(stats.chunks, 9);
}

#[test]
fn sink_receives_frames_in_order() {
    let comp = promo_composition().unwrap();
    let threading = RenderThreading {
        parallel: true,
        chunk_size: 5,
        threads: Some(2),
    };
    let mut sink = InMemorySink::new();
    let stats = render_to_sink(&comp, range(520, 540), &threading, &mut sink).unwrap();

    assert_eq!(stats.frames_rendered, 20);
    assert!(sink.is_finished());
    let cfg = sink.config().unwrap();
    assert_eq!(cfg.id, "AEOEnginePromo");
    assert_eq!((cfg.width, cfg.height), (1280, 720));
    assert_eq!(cfg.range, range(520, 540));

    let indices: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(indices, (520..540).collect::<Vec<_>>());
    assert!(sink.frames().iter().all(|(i, f)| *i == f.frame));
}

#[test]
fn bad_ranges_are_rejected() {
    let comp = promo_composition().unwrap();
    let threading = RenderThreading::default();
    assert!(render_frames(&comp, range(10, 10), &threading).is_err());
    let err = render_frames(&comp, range(530, 541), &threading)
        .err()
        .unwrap();
    assert!(err.to_string().contains("exceeds composition duration"));
}

#[test]
fn rejected_renders_never_begin_the_sink() {
    let comp = promo_composition().unwrap();
    let mut sink = InMemorySink::new();

    let serial = RenderThreading::default();
    assert!(render_to_sink(&comp, range(5, 5), &serial, &mut sink).is_err());
    assert!(render_to_sink(&comp, range(530, 545), &serial, &mut sink).is_err());
    let zero_threads = RenderThreading {
        parallel: true,
        threads: Some(0),
        ..RenderThreading::default()
    };
    assert!(render_to_sink(&comp, range(0, 10), &zero_threads, &mut sink).is_err());

    assert!(sink.config().is_none());
    assert!(sink.frames().is_empty());
}

#[test]
fn check_render_range_accepts_the_full_timeline() {
    let comp = promo_composition().unwrap();
    check_render_range(&comp, range(0, 540)).unwrap();
    assert!(check_render_range(&comp, range(0, 541)).is_err());
}
