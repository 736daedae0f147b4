//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `predictor_form`: The applicant form and its result panel

mod field_renderer;
mod predictor_form;

pub use predictor_form::draw_predictor;
