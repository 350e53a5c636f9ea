//! Eventide Onboarding - Adaptive Questionnaire & Preference Inference
//!
//! This crate implements the onboarding engine for the Eventide event
//! marketplace: a branching question catalog, confidence-scored answer
//! recording, and rule-based derivation of a personalization profile.

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;
