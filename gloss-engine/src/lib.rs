//! Client side of the code-explanation capability boundary.
//!
//! The explanation algorithm lives in an external service; this crate
//! defines the typed seam ([`Explainer`]) and an HTTP/1 client
//! implementation ([`UpstreamExplainer`]) that forwards code to it.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod explainer;
pub mod upstream;

pub use error::ExplainError;
pub use explainer::Explainer;
pub use upstream::UpstreamExplainer;
