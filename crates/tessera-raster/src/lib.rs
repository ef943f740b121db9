#![warn(missing_docs)]

//! Barycentric interpolation and rasterization.
//!
//! Texture space is normalised to `[0, 1]` with its origin at the
//! bottom-left corner. Image space counts texels from the top-left corner,
//! y growing downwards. A [`Texel`](tessera_primitives::Texel) names its
//! top-left corner.
//!
//! "Contained" rasterizers return the texels whose center lies in the
//! shape; the "overlapping" rasterizer returns every texel the shape
//! touches.
//!
//! ```
//! use tessera_math::Point2;
//! use tessera_primitives::{Aabb2, Texel};
//! use tessera_raster::rasterize_aabb_overlapping;
//!
//! let aabb = Aabb2::new(Point2::new(0.0, 0.0), Point2::new(0.3, 0.3));
//! let texels = rasterize_aabb_overlapping(&aabb, 4, 4);
//! assert_eq!(
//!     texels,
//!     vec![Texel::new(0, 2), Texel::new(1, 2), Texel::new(0, 3), Texel::new(1, 3)]
//! );
//! ```

pub mod area;
pub mod barycentric;
pub mod raster;

pub use area::{quad_area, triangle_area};
pub use barycentric::{barycentric_quad, barycentric_triangle, interpolate_quad, interpolate_triangle};
pub use raster::{
    image_coordinates, rasterize_aabb_overlapping, rasterize_quad_contained,
    rasterize_triangle_contained, rasterize_triangles_contained, texture_coordinates,
};
