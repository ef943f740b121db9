//! Texture-to-image mapping and rasterization of 2D shapes.

use tessera_intersect::{quad_contains, triangle_contains};
use tessera_math::{Point2, Vec2};
use tessera_primitives::{Aabb2, Quad2, Texel, Triangle2};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Products closer than this to an integer are treated as that integer.
const SNAP: f64 = 1e-9;

fn snapped_floor(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < SNAP {
        r
    } else {
        v.floor()
    }
}

/// Map a point from texture space to the texel containing it.
///
/// `x = ⌊p.x·width⌋`, `y = height - ⌊p.y·height⌋`. Products within `1e-9`
/// of an integer snap to it, so texel corners from
/// [`texture_coordinates`] map back to their own texel.
pub fn image_coordinates(p: &Point2, width: u32, height: u32) -> Texel {
    let w = f64::from(width);
    let h = f64::from(height);
    let x = snapped_floor(p.x * w);
    let y = h - snapped_floor(p.y * h);
    Texel::new(x as i32, y as i32)
}

/// Map a texel to the texture-space position of its top-left corner.
pub fn texture_coordinates(texel: &Texel, width: u32, height: u32) -> Point2 {
    let w = f64::from(width);
    let h = f64::from(height);
    Point2::new(f64::from(texel.x) / w, 1.0 - f64::from(texel.y) / h)
}

/// Inclusive texel range covering a texture-space box.
fn overlapped_range(aabb: &Aabb2, width: u32, height: u32) -> (Texel, Texel) {
    let lo = image_coordinates(&aabb.min(), width, height);
    let hi = image_coordinates(&aabb.max(), width, height);
    // Texture y points up, image y points down
    (Texel::new(lo.x, hi.y), Texel::new(hi.x - 1, lo.y - 1))
}

/// Inclusive texel range whose centers fall inside a texture-space box.
///
/// Centers sit at `((x + 0.5) / w, 1 - (y + 0.5) / h)`.
fn center_range(aabb: &Aabb2, width: u32, height: u32) -> (Texel, Texel) {
    let w = f64::from(width);
    let h = f64::from(height);
    let (min, max) = (aabb.min(), aabb.max());
    let first = Texel::new(
        (min.x * w - 0.5 - SNAP).ceil() as i32,
        ((1.0 - max.y) * h - 0.5 - SNAP).ceil() as i32,
    );
    let last = Texel::new(
        (max.x * w - 0.5 + SNAP).floor() as i32,
        ((1.0 - min.y) * h - 0.5 + SNAP).floor() as i32,
    );
    (first, last)
}

/// Visit the texels from `first` to `last` inclusive, row by row.
///
/// `visit` receives each texel and its center in texture space.
fn walk<F>((first, last): (Texel, Texel), width: u32, height: u32, mut visit: F)
where
    F: FnMut(Texel, Point2),
{
    let half_texel = Vec2::new(0.5 / f64::from(width), -0.5 / f64::from(height));
    for y in first.y..=last.y {
        for x in first.x..=last.x {
            let texel = Texel::new(x, y);
            let center = texture_coordinates(&texel, width, height) + half_texel;
            visit(texel, center);
        }
    }
}

fn is_degenerate(width: u32, height: u32) -> bool {
    if width == 0 || height == 0 {
        log::debug!("nothing to rasterize on a {}x{} image", width, height);
        return true;
    }
    false
}

/// Texels whose center lies in the triangle.
pub fn rasterize_triangle_contained(triangle: &Triangle2, width: u32, height: u32) -> Vec<Texel> {
    let mut texels = Vec::new();
    if is_degenerate(width, height) {
        return texels;
    }
    let range = center_range(&triangle.aabb(), width, height);
    walk(range, width, height, |texel, center| {
        if triangle_contains(triangle, &center) {
            texels.push(texel);
        }
    });
    log::trace!("triangle covers {} texels on {}x{}", texels.len(), width, height);
    texels
}

/// Texels whose center lies in the quad.
pub fn rasterize_quad_contained(quad: &Quad2, width: u32, height: u32) -> Vec<Texel> {
    let mut texels = Vec::new();
    if is_degenerate(width, height) {
        return texels;
    }
    let range = center_range(&quad.aabb(), width, height);
    walk(range, width, height, |texel, center| {
        if quad_contains(quad, &center) {
            texels.push(texel);
        }
    });
    log::trace!("quad covers {} texels on {}x{}", texels.len(), width, height);
    texels
}

/// Texels overlapped by the box.
///
/// The maximum corner is pushed out by one texel so that the texel
/// holding it is included.
pub fn rasterize_aabb_overlapping(aabb: &Aabb2, width: u32, height: u32) -> Vec<Texel> {
    let mut texels = Vec::new();
    if is_degenerate(width, height) || aabb.is_empty() {
        return texels;
    }
    let texel_size = Vec2::new(1.0 / f64::from(width), 1.0 / f64::from(height));
    let range = overlapped_range(&aabb.with_max_offset(&texel_size), width, height);
    walk(range, width, height, |texel, _| {
        texels.push(texel);
    });
    log::trace!("box overlaps {} texels on {}x{}", texels.len(), width, height);
    texels
}

/// [`rasterize_triangle_contained`] over a batch, one result per triangle in input order.
#[cfg(feature = "parallel")]
pub fn rasterize_triangles_contained(
    triangles: &[Triangle2],
    width: u32,
    height: u32,
) -> Vec<Vec<Texel>> {
    triangles
        .par_iter()
        .map(|t| rasterize_triangle_contained(t, width, height))
        .collect()
}

/// [`rasterize_triangle_contained`] over a batch, one result per triangle in input order.
#[cfg(not(feature = "parallel"))]
pub fn rasterize_triangles_contained(
    triangles: &[Triangle2],
    width: u32,
    height: u32,
) -> Vec<Vec<Texel>> {
    triangles
        .iter()
        .map(|t| rasterize_triangle_contained(t, width, height))
        .collect()
}
