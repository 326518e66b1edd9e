use super::*;
use crate::config::animation::AnimationConfig;
use crate::config::palette::PaletteSpec;
use crate::encode::ffmpeg::is_ffmpeg_on_path;
use crate::encode::sink::InMemorySink;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::TumbleError;
use crate::render::frame::FrameRgb;
use std::path::PathBuf;

fn small_anim(frames: u64) -> Animation {
    AnimationConfig {
        size: 32,
        frame_count: frames,
        palette: PaletteSpec::Random {
            count: 4,
            seed: Some(3),
        },
        ..AnimationConfig::default()
    }
    .resolve()
    .unwrap()
}

#[test]
fn render_to_sink_pushes_every_frame_in_order() {
    let anim = small_anim(6);
    let mut sink = InMemorySink::new();
    let stats = render_to_sink(&anim, &mut sink).unwrap();

    assert_eq!(stats.frames_total, 6);
    assert_eq!(stats.bytes_written, 6 * 32 * 32 * 3);
    assert_eq!(sink.config(), Some(sink_config(&anim)));
    assert!(sink.is_finished());
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1, 2, 3, 4, 5]);
}

struct FailAt {
    fail_at: u64,
    pushed: u64,
    ended: bool,
}

impl FrameSink for FailAt {
    fn begin(&mut self, _cfg: SinkConfig) -> TumbleResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, _frame: &FrameRgb) -> TumbleResult<()> {
        if idx.0 == self.fail_at {
            return Err(TumbleError::encode("disk full"));
        }
        self.pushed += 1;
        Ok(())
    }

    fn end(&mut self) -> TumbleResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[test]
fn sink_failure_stops_the_run_without_ending() {
    let anim = small_anim(5);
    let mut sink = FailAt {
        fail_at: 2,
        pushed: 0,
        ended: false,
    };
    let err = render_to_sink(&anim, &mut sink).unwrap_err();
    assert!(matches!(err, TumbleError::Encode(_)));
    assert_eq!(sink.pushed, 2);
    assert!(!sink.ended);
}

struct RecordingPublisher {
    seen: Option<PathBuf>,
    existed: bool,
    fail: bool,
}

impl Publisher for RecordingPublisher {
    fn publish(&mut self, path: &Path, request: &PublishRequest) -> TumbleResult<PublishReceipt> {
        self.seen = Some(path.to_path_buf());
        self.existed = path.exists();
        assert!(request.title.ends_with(".mp4"));
        if self.fail {
            return Err(TumbleError::publish("quota exceeded"));
        }
        Ok(PublishReceipt {
            id: "abc".to_owned(),
            bytes: 0,
        })
    }
}

#[test]
fn render_and_publish_always_removes_the_artifact() {
    let workdir = PathBuf::from("target").join("pipeline_unit");
    std::fs::create_dir_all(&workdir).unwrap();
    let anim = small_anim(4);

    for fail in [false, true] {
        let mut publisher = RecordingPublisher {
            seen: None,
            existed: false,
            fail,
        };
        let res = render_and_publish(&anim, &workdir, &mut publisher);

        if !is_ffmpeg_on_path() {
            assert!(matches!(res, Err(TumbleError::Encode(_))));
            assert!(publisher.seen.is_none());
            continue;
        }

        assert_eq!(res.is_err(), fail);
        let seen = publisher.seen.expect("publisher was called");
        assert!(publisher.existed);
        assert!(!seen.exists());
    }
}
