//! Matatu route planner server.
//!
//! A web application that answers: "which matatu do I take to get from
//! here to there?" Places and transit directions come from Google Maps
//! Platform; matatu details the provider lacks are filled in.

pub mod config;
pub mod domain;
pub mod maps;
pub mod places;
pub mod routing;
pub mod web;
