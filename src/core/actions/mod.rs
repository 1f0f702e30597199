pub mod rasterize_points;
