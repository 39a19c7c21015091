//! Integration Tests Module
//!
//! End-to-end behaviour of Meeting Tasks: tolerant response parsing through
//! to rendered graph text, full pipeline runs against a mock provider, and
//! configuration resolution.

// Shared mock provider and fixtures
mod common;

// Response parsing → validation → Mermaid properties
mod parsing_test;

// Pipeline runs: output folders, files, empty and failing extractions
mod pipeline_test;

// Config file + override resolution
mod config_test;
