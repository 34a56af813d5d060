use image::{GrayImage, Luma};
use imageproc::contours::{find_contours, BorderType};
use imageproc::point::Point;

/// Intensity a mask pixel must match exactly to count as foreground.
/// Anything else, including near-white anti-aliased edges, is background.
pub const FOREGROUND: u8 = 255;

/// Build the binary foreground mask for a grayscale raster.
pub fn foreground_mask(raster: &GrayImage) -> GrayImage {
    let mut mask = GrayImage::new(raster.width(), raster.height());
    for (x, y, pixel) in raster.enumerate_pixels() {
        if pixel[0] == FOREGROUND {
            mask.put_pixel(x, y, Luma([255u8]));
        }
    }
    mask
}

/// Trace the outermost boundary polygons of a binary mask.
///
/// Interior (hole) borders are discarded, and straight boundary runs are
/// collapsed to their endpoints, so a filled rectangle comes back as its
/// four corners rather than every border pixel.
///
/// Regions touching the raster edge are traced like any other: the tracer
/// treats image-border pixels as background, so tracing runs over a copy
/// padded with a 1-pixel background frame and the vertices are shifted back.
pub fn trace_outer_contours(mask: &GrayImage) -> Vec<Vec<Point<i32>>> {
    let mut padded = GrayImage::new(mask.width() + 2, mask.height() + 2);
    for (x, y, pixel) in mask.enumerate_pixels() {
        if pixel[0] != 0 {
            padded.put_pixel(x + 1, y + 1, *pixel);
        }
    }

    find_contours::<i32>(&padded)
        .into_iter()
        .filter(|contour| contour.border_type == BorderType::Outer)
        .map(|contour| {
            simplify_chain(&contour.points)
                .into_iter()
                .map(|p| Point::new(p.x - 1, p.y - 1))
                .collect()
        })
        .collect()
}

/// Collapse straight runs of a closed pixel chain, keeping a vertex only
/// where the step direction changes.
///
/// Chains with fewer than 3 points cannot contain a redundant vertex and are
/// returned unchanged.
pub fn simplify_chain(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }

    let mut kept = Vec::new();
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let cur = points[i];
        let next = points[(i + 1) % n];
        let incoming = (cur.x - prev.x, cur.y - prev.y);
        let outgoing = (next.x - cur.x, next.y - cur.y);
        if incoming != outgoing {
            kept.push(cur);
        }
    }
    kept
}
