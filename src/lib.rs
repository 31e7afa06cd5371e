//! Hotel Search Bot - Telegram dialogue for finding hotels
//!
//! This crate walks each chat through a short sequence of prompts (city,
//! optional price and distance ranges, number of hotels), then pages
//! through a remote hotel API and replies with the matching listings.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
