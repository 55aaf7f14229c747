//! Typed endpoint methods of [`crate::DineDashClient`], one module per API area.

mod admin;
mod auth;
mod favorites;
mod orders;
mod payments;
mod reservations;
mod restaurants;
