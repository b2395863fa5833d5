//! Route calculation proxy server.
//!
//! A small HTTP service that validates route requests, forwards them to a
//! directions provider, and normalizes whatever comes back, keeping the
//! provider API key on the server.

pub mod config;
pub mod directions;
pub mod domain;
pub mod web;
