//! CLI infrastructure for the naming-game analysis toolkit
//!
//! This module provides the command-line interface for comparing exposure
//! strategies, simulating information gain, timing first matches and
//! summarising many games by condition.

pub mod commands;
pub mod config;
pub mod output;
