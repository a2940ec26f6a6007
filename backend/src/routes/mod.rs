//! Output view types handed to the rendering layer.
//!
//! Every type carries raw numbers only; currency display, rounding and
//! localization belong to the renderer.

pub mod heatmap;
pub mod monthly_sales;
