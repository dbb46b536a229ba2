//! Seven-segment scoreboard layout and the full-time verdict.
//!
//! Produces the filled rectangles for each digit; drawing them is left to
//! the presentation layer.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// Segment order used by [`SEGMENTS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Top,
    TopRight,
    BottomRight,
    Bottom,
    BottomLeft,
    TopLeft,
    Middle,
}

impl Segment {
    pub const ALL: [Segment; 7] = [
        Segment::Top,
        Segment::TopRight,
        Segment::BottomRight,
        Segment::Bottom,
        Segment::BottomLeft,
        Segment::TopLeft,
        Segment::Middle,
    ];
}

/// Lit segments per decimal digit, indexed `[digit][segment]`.
pub const SEGMENTS: [[bool; 7]; 10] = [
    [true, true, true, true, true, true, false],     // 0
    [false, true, true, false, false, false, false], // 1
    [true, true, false, true, true, false, true],    // 2
    [true, true, true, true, false, false, true],    // 3
    [false, true, true, false, false, true, true],   // 4
    [true, false, true, true, false, true, true],    // 5
    [true, false, true, true, true, true, true],     // 6
    [true, true, true, false, false, false, false],  // 7
    [true, true, true, true, true, true, true],      // 8
    [true, true, true, true, false, true, true],     // 9
];

/// Rectangle of one segment for a digit cell at `(x, y)` of height `size`.
/// Integer pixel arithmetic, so small sizes snap the same way on every
/// renderer.
fn segment_rect(segment: Segment, x: i32, y: i32, size: i32) -> Rect {
    let w = size / 3;
    let h = size / 2;
    let (rx, ry, rw, rh) = match segment {
        Segment::Top => (x + w / 3, y, w, h / 5),
        Segment::TopRight => (x + w + w / 3, y, w / 5, h),
        Segment::BottomRight => (x + w + w / 3, y + h, w / 5, h),
        Segment::Bottom => (x + w / 3, y + 2 * h - h / 5, w, h / 5),
        Segment::BottomLeft => (x, y + h, w / 5, h),
        Segment::TopLeft => (x, y, w / 5, h),
        Segment::Middle => (x + w / 3, y + h - h / 10, w, h / 5),
    };
    Rect::new(rx as f32, ry as f32, rw as f32, rh as f32)
}

/// Filled rectangles for a single digit. Anything outside `0..=9` yields
/// nothing.
pub fn digit_segments(digit: u8, x: i32, y: i32, size: i32) -> Vec<Rect> {
    let Some(lit) = SEGMENTS.get(digit as usize) else {
        return Vec::new();
    };
    Segment::ALL
        .iter()
        .zip(lit.iter())
        .filter(|(_, on)| **on)
        .map(|(seg, _)| segment_rect(*seg, x, y, size))
        .collect()
}

/// Decimal digits of `number`, most significant first.
pub fn digits(number: u64) -> Vec<u8> {
    number
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect()
}

/// Filled rectangles for every digit of `number`, laid out left to right
/// with a stride of half the digit height.
pub fn number_segments(number: u64, x: i32, y: i32, size: i32) -> Vec<Rect> {
    let spacing = size / 2;
    digits(number)
        .into_iter()
        .enumerate()
        .flat_map(|(i, d)| digit_segments(d, x + i as i32 * spacing, y, size))
        .collect()
}

/// Result banner shown at full time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    HomeWin,
    AwayWin,
    Draw,
}

pub fn verdict(home_score: u32, away_score: u32) -> Verdict {
    match home_score.cmp(&away_score) {
        std::cmp::Ordering::Greater => Verdict::HomeWin,
        std::cmp::Ordering::Less => Verdict::AwayWin,
        std::cmp::Ordering::Equal => Verdict::Draw,
    }
}
