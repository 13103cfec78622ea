mod common;

use std::io::Write;

use bargrade_core::error::GraderError;
use bargrade_core::frame::Rotation;
use bargrade_core::ingest::ingest_frame;
use bargrade_core::io::yuv_stream::YuvStream;

use common::I420Frame;

fn write_stream(frames: &[I420Frame], extra: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    for frame in frames {
        file.write_all(&frame.to_bytes()).unwrap();
    }
    file.write_all(extra).unwrap();
    file.flush().unwrap();
    file
}

fn numbered(count: usize, width: usize, height: usize) -> Vec<I420Frame> {
    (0..count)
        .map(|i| I420Frame::from_luma(width, height, move |_, _| 16 + 50 * i as u8))
        .collect()
}

#[test]
fn test_frame_size_and_count() {
    let file = write_stream(&numbered(3, 6, 4), &[]);
    let stream = YuvStream::open(file.path(), 6, 4, Rotation::Deg0).unwrap();
    assert_eq!(stream.frame_byte_size(), 6 * 4 + 2 * 3 * 2);
    assert_eq!(stream.frame_count(), 3);
    assert_eq!(stream.dimensions(), (6, 4));
}

#[test]
fn test_odd_dimensions_round_chroma_up() {
    let file = write_stream(&numbered(2, 5, 3), &[]);
    let stream = YuvStream::open(file.path(), 5, 3, Rotation::Deg0).unwrap();
    assert_eq!(stream.frame_byte_size(), 15 + 2 * 3 * 2);
    assert_eq!(stream.frame_count(), 2);
}

#[test]
fn test_frames_are_read_in_order() {
    let file = write_stream(&numbered(3, 6, 4), &[]);
    let stream = YuvStream::open(file.path(), 6, 4, Rotation::Deg0).unwrap();

    let lumas: Vec<u8> = stream
        .frames()
        .map(|f| f.unwrap().y.data[0])
        .collect();
    assert_eq!(lumas, vec![16, 66, 116]);

    let second = stream.frame(1).unwrap();
    assert_eq!(second.u.data, &[128; 6][..]);
    let raster = ingest_frame(&second).unwrap();
    assert_eq!((raster.width(), raster.height()), (6, 4));
}

#[test]
fn test_rotation_is_carried() {
    let file = write_stream(&numbered(1, 6, 4), &[]);
    let stream = YuvStream::open(file.path(), 6, 4, Rotation::Deg270).unwrap();
    let frame = stream.frame(0).unwrap();
    assert_eq!(frame.rotation, Rotation::Deg270);
    let raster = ingest_frame(&frame).unwrap();
    assert_eq!((raster.width(), raster.height()), (4, 6));
}

#[test]
fn test_index_out_of_range() {
    let file = write_stream(&numbered(2, 6, 4), &[]);
    let stream = YuvStream::open(file.path(), 6, 4, Rotation::Deg0).unwrap();
    match stream.frame(2) {
        Err(GraderError::FrameIndexOutOfRange { index, total }) => {
            assert_eq!(index, 2);
            assert_eq!(total, 2);
        }
        other => panic!("expected FrameIndexOutOfRange, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_trailing_bytes_rejected() {
    let file = write_stream(&numbered(2, 6, 4), &[0, 1, 2]);
    assert!(matches!(
        YuvStream::open(file.path(), 6, 4, Rotation::Deg0),
        Err(GraderError::MalformedInput(_))
    ));
}

#[test]
fn test_zero_dimensions_rejected() {
    let file = write_stream(&numbered(1, 6, 4), &[]);
    assert!(matches!(
        YuvStream::open(file.path(), 0, 4, Rotation::Deg0),
        Err(GraderError::MalformedInput(_))
    ));
}

#[test]
fn test_unaddressable_frame_size_rejected() {
    let file = write_stream(&numbered(1, 6, 4), &[]);
    let half = usize::MAX / 2;
    assert!(matches!(
        YuvStream::open(file.path(), half, half, Rotation::Deg0),
        Err(GraderError::MalformedInput(_))
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = YuvStream::open(
        std::path::Path::new("/nonexistent/stream.yuv"),
        6,
        4,
        Rotation::Deg0,
    );
    assert!(matches!(result, Err(GraderError::Io(_))));
}
