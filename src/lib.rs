//! # Rounds Rust Backend
//!
//! Delivery-round tracking engine for a door-to-door mail carrier.
//!
//! This crate provides the domain kernel and REST backend for a carrier
//! dashboard covering a small set of rotating delivery areas. It decides
//! which area is worked on a given day, tracks the delivery lifecycle of
//! every apartment in every building, orders the day's stops into a
//! visiting path, and persists the whole state as a versioned document.
//!
//! ## Features
//!
//! - **Area rotation**: deterministic mapping from calendar dates to the
//!   area delivered today and the area prepared for tomorrow
//! - **Delivery tracking**: per-apartment status lifecycle, append-only
//!   attempt history, and registered-mail due dates
//! - **Route planning**: greedy nearest-neighbor ordering of geocoded stops
//! - **Versioned persistence**: JSON document store with schema migration
//!   and seeded first-run state
//! - **HTTP API**: RESTful endpoints for the dashboard frontend
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Core domain types (areas, buildings, apartments)
//! - [`scheduler`]: Pure date-to-area rotation functions
//! - [`routing`]: Tour ordering strategies over geocoded buildings
//! - [`db`]: Document store, schema migration, and persistence layer
//! - [`services`]: High-level business logic over the store
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod db;
pub mod models;

pub mod routing;
pub mod scheduler;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
