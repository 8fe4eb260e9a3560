//! HTTP gateway for the gloss code-explanation service.
//!
//! Exposes a single `POST /explain` endpoint that forwards the submitted
//! code to the configured [`gloss_engine::Explainer`] and returns its
//! reply in a `{"result": ...}` envelope.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod routes;
