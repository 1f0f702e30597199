use glam::{Mat4, Vec3};
use rayon::prelude::*;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::render::colour::Rgb;

/// Projects `points` through `clip_from_world` into pixel coordinates.
///
/// Points behind the camera or outside the clip volume are culled. Runs on
/// rayon's pool; output order follows input order.
#[must_use]
pub fn project_points(points: &[Vec3], clip_from_world: Mat4, width: u32, height: u32) -> Vec<Point> {
    let half_width = width as f32 * 0.5;
    let half_height = height as f32 * 0.5;

    points
        .par_iter()
        .filter_map(|p| {
            let clip = clip_from_world * p.extend(1.0);
            if !(clip.w > 0.0) {
                return None;
            }

            let ndc = clip.truncate() / clip.w;
            if !ndc.is_finite() || ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 || ndc.z.abs() > 1.0 {
                return None;
            }

            let x = ((ndc.x + 1.0) * half_width).floor() as i32;
            let y = ((1.0 - ndc.y) * half_height).floor() as i32;

            Some(Point {
                x: x.min(width as i32 - 1),
                y: y.min(height as i32 - 1),
            })
        })
        .collect()
}

/// Splats every visible point as a square of side `ceil(point_size)` pixels.
/// Sizes below one pixel dim the splat instead of shrinking it.
///
/// Returns the number of points that survived culling.
pub fn rasterize_points(
    buffer: &mut PixelBuffer,
    points: &[Vec3],
    clip_from_world: Mat4,
    colour: Rgb,
    point_size: f32,
) -> usize {
    let rect = buffer.pixel_rect();
    let projected = project_points(points, clip_from_world, rect.width(), rect.height());

    let side = point_size.ceil().max(1.0) as i32;
    let offset = (side - 1) / 2;
    let colour = colour.to_colour(point_size.min(1.0));

    for centre in &projected {
        for dy in 0..side {
            for dx in 0..side {
                buffer.blend_pixel(
                    Point {
                        x: centre.x - offset + dx,
                        y: centre.y - offset + dy,
                    },
                    colour,
                );
            }
        }
    }

    projected.len()
}
