//! PricePredictor - Main API for predicting resale prices
//!
//! Runs the linear prediction pipeline for one request:
//! 1. Validate & encode the raw input
//! 2. Transform it into the model feature vector
//! 3. Infer the log price with the shared model
//! 4. Exponentiate and round to a price
//!
//! Any failure aborts the request; there are no partial results.
//!
//! - `types`: Request/Response types (PredictionRequest, PredictionResponse, PredictedPrice)
//! - `engine`: Core PricePredictor implementation
//! - `tests`: Unit tests (test-only)

mod engine;
mod types;

pub use engine::PricePredictor;
pub use types::{PredictedPrice, PredictionOptions, PredictionRequest, PredictionResponse};
