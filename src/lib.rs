//! Rules Sage - Multi-Agent MTG Rules Assistant
//!
//! This crate routes a user's rules question to one of several specialized
//! prompt templates via a classification step, then returns the generated
//! answer, tracking a two-phase workflow for progress display.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
