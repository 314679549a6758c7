// Copyright (c) 2025 - Cowboy AI, Inc.

//! Collaborator adapter implementations
//!
//! Concrete implementations of the traits the governance engine consumes.
//! The engine only ever sees the trait objects.

pub mod label_validator;

pub use label_validator::CloudLabelValidator;
