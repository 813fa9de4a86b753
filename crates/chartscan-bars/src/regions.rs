//! Connected-region extraction over a binary mask.
//!
//! Flood-fill labeling with 8-connectivity, returning one axis-aligned
//! bounding box per maximal on-region. Interior holes are off-pixels and so
//! belong to no region; a region's box covers anything nested inside it,
//! matching external-boundary contour extraction.

use chartscan_core::Mask;

use crate::types::Bar;

/// Bounding boxes of all maximal connected on-regions of `mask`.
///
/// The output order follows the scan order of each region's first pixel and
/// carries no meaning; callers sort.
pub fn find_regions(mask: &Mask) -> Vec<Bar> {
    let mut visited = vec![false; mask.width * mask.height];
    let mut regions = Vec::new();
    let mut stack = Vec::new();

    for y in 0..mask.height {
        for x in 0..mask.width {
            let idx = y * mask.width + x;
            if visited[idx] || !mask.is_on(x, y) {
                continue;
            }

            let (mut min_x, mut min_y) = (x, y);
            let (mut max_x, mut max_y) = (x, y);
            visited[idx] = true;
            stack.push((x, y));

            while let Some((cx, cy)) = stack.pop() {
                min_x = min_x.min(cx);
                min_y = min_y.min(cy);
                max_x = max_x.max(cx);
                max_y = max_y.max(cy);

                for dy in -1i32..=1 {
                    for dx in -1i32..=1 {
                        let nx = cx as i32 + dx;
                        let ny = cy as i32 + dy;
                        if nx < 0
                            || ny < 0
                            || nx >= mask.width as i32
                            || ny >= mask.height as i32
                        {
                            continue;
                        }
                        let (nx, ny) = (nx as usize, ny as usize);
                        let nidx = ny * mask.width + nx;
                        if !visited[nidx] && mask.is_on(nx, ny) {
                            visited[nidx] = true;
                            stack.push((nx, ny));
                        }
                    }
                }
            }

            regions.push(Bar {
                x: min_x as u32,
                y: min_y as u32,
                width: (max_x - min_x + 1) as u32,
                height: (max_y - min_y + 1) as u32,
            });
        }
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_with_rects(width: usize, height: usize, rects: &[(usize, usize, usize, usize)]) -> Mask {
        let mut mask = Mask::empty(width, height);
        for &(x, y, w, h) in rects {
            for yy in y..y + h {
                for xx in x..x + w {
                    mask.set_on(xx, yy);
                }
            }
        }
        mask
    }

    #[test]
    fn disjoint_rectangles_become_separate_regions() {
        let mask = mask_with_rects(40, 30, &[(2, 5, 4, 10), (10, 3, 5, 12), (25, 8, 6, 7)]);
        let mut regions = find_regions(&mask);
        regions.sort_by_key(|b| b.x);
        assert_eq!(
            regions,
            vec![
                Bar { x: 2, y: 5, width: 4, height: 10 },
                Bar { x: 10, y: 3, width: 5, height: 12 },
                Bar { x: 25, y: 8, width: 6, height: 7 },
            ]
        );
    }

    #[test]
    fn diagonally_touching_pixels_join_one_region() {
        let mut mask = Mask::empty(10, 10);
        mask.set_on(2, 2);
        mask.set_on(3, 3);
        let regions = find_regions(&mask);
        assert_eq!(regions.len(), 1);
        assert_eq!(
            regions[0],
            Bar { x: 2, y: 2, width: 2, height: 2 }
        );
    }

    #[test]
    fn region_box_covers_interior_holes() {
        // A 6x6 ring with a hollow center is one region whose box spans the
        // full ring, hole included.
        let mut mask = mask_with_rects(12, 12, &[(3, 3, 6, 6)]);
        for yy in 5..7 {
            for xx in 5..7 {
                mask.data[yy * 12 + xx] = 0;
            }
        }
        let regions = find_regions(&mask);
        assert_eq!(regions.len(), 1);
        assert_eq!(
            regions[0],
            Bar { x: 3, y: 3, width: 6, height: 6 }
        );
    }

    #[test]
    fn empty_mask_has_no_regions() {
        assert!(find_regions(&Mask::empty(8, 8)).is_empty());
    }
}
