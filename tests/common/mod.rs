//! Shared test utilities

#![allow(dead_code)]

pub mod fixtures;
pub mod mock_service;
