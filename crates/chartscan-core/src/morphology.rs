//! Morphological cleanup over binary masks, 3x3 rectangular neighborhood.
//!
//! Closing (dilate then erode) merges the small gaps anti-aliasing or
//! gridlines cut into a bar; opening (erode then dilate) drops isolated
//! noise pixels. During erosion, neighbors outside the image count as set,
//! so closing does not eat into bars touching the image border.

use serde::{Deserialize, Serialize};

use crate::mask::Mask;

/// Iteration counts for the cleanup passes run before region extraction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MorphologyParams {
    /// Closing passes (dilate then erode). Zero disables closing.
    pub closing_iterations: usize,
    /// Opening passes run *before* closing. Off by default: opening can
    /// erase genuinely thin bars.
    pub opening_iterations: usize,
}

impl Default for MorphologyParams {
    fn default() -> Self {
        Self {
            closing_iterations: 2,
            opening_iterations: 0,
        }
    }
}

/// Dilate by one 3x3 pass: a pixel turns on if any neighbor is on.
pub fn dilate(mask: &Mask) -> Mask {
    let mut out = Mask::empty(mask.width, mask.height);
    for y in 0..mask.height {
        for x in 0..mask.width {
            if any_neighbor(mask, x, y, true) {
                out.set_on(x, y);
            }
        }
    }
    out
}

/// Erode by one 3x3 pass: a pixel stays on only if all neighbors are on.
/// Out-of-bounds neighbors count as on.
pub fn erode(mask: &Mask) -> Mask {
    let mut out = Mask::empty(mask.width, mask.height);
    for y in 0..mask.height {
        for x in 0..mask.width {
            if mask.is_on(x, y) && !any_neighbor(mask, x, y, false) {
                out.set_on(x, y);
            }
        }
    }
    out
}

/// Morphological closing: `iterations` dilations, then as many erosions.
pub fn close(mask: &Mask, iterations: usize) -> Mask {
    let mut m = mask.clone();
    for _ in 0..iterations {
        m = dilate(&m);
    }
    for _ in 0..iterations {
        m = erode(&m);
    }
    m
}

/// Morphological opening: `iterations` erosions, then as many dilations.
pub fn open(mask: &Mask, iterations: usize) -> Mask {
    let mut m = mask.clone();
    for _ in 0..iterations {
        m = erode(&m);
    }
    for _ in 0..iterations {
        m = dilate(&m);
    }
    m
}

/// Scan the 3x3 neighborhood of `(x, y)` for a pixel in state `want_on`.
/// Out-of-bounds neighbors are skipped, so they never match `want_on`:
/// they count as off for dilation and as on for erosion.
fn any_neighbor(mask: &Mask, x: usize, y: usize, want_on: bool) -> bool {
    for dy in -1i32..=1 {
        for dx in -1i32..=1 {
            let nx = x as i32 + dx;
            let ny = y as i32 + dy;
            if nx < 0 || ny < 0 || nx >= mask.width as i32 || ny >= mask.height as i32 {
                continue;
            }
            if mask.is_on(nx as usize, ny as usize) == want_on {
                return true;
            }
        }
    }
    false
}
