//! Preview rendering: draw detected bar boxes onto a copy of the image.

use image::{Rgb, RgbImage};

use chartscan_bars::BarSeries;

const BOX_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const BOX_THICKNESS: u32 = 2;

/// Copy of `img` with each bar's bounding box outlined in green.
///
/// The outline is drawn inside the box so it never spills outside the
/// image. The input image is untouched.
pub fn annotate(img: &RgbImage, series: &BarSeries) -> RgbImage {
    let mut out = img.clone();
    for bar in series {
        let x1 = bar.right().min(out.width());
        let y1 = bar.bottom().min(out.height());
        for x in bar.x..x1 {
            for y in bar.y..y1 {
                let near_vertical = x < bar.x + BOX_THICKNESS || x + BOX_THICKNESS >= x1;
                let near_horizontal = y < bar.y + BOX_THICKNESS || y + BOX_THICKNESS >= y1;
                if near_vertical || near_horizontal {
                    out.put_pixel(x, y, BOX_COLOR);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartscan_bars::Bar;

    #[test]
    fn outlines_the_box_and_leaves_the_interior_alone() {
        let img = RgbImage::from_pixel(20, 20, Rgb([255, 255, 255]));
        let series = BarSeries {
            bars: vec![Bar {
                x: 2,
                y: 2,
                width: 10,
                height: 14,
            }],
        };
        let out = annotate(&img, &series);

        // Corners and edges are painted.
        assert_eq!(*out.get_pixel(2, 2), BOX_COLOR);
        assert_eq!(*out.get_pixel(11, 15), BOX_COLOR);
        assert_eq!(*out.get_pixel(6, 3), BOX_COLOR);
        // Interior and surroundings are untouched.
        assert_eq!(*out.get_pixel(6, 8), Rgb([255, 255, 255]));
        assert_eq!(*out.get_pixel(15, 8), Rgb([255, 255, 255]));
        // The input is not mutated.
        assert_eq!(*img.get_pixel(2, 2), Rgb([255, 255, 255]));
    }
}
