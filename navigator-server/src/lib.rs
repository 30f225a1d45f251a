//! Campus navigator server.
//!
//! Answers: "What is the fastest way across campus, walking or riding the
//! carts?" Networks are read from plain-text descriptions and served over
//! HTTP or printed as directions on the command line.

pub mod cache;
pub mod cli;
pub mod config;
pub mod domain;
pub mod loader;
pub mod planner;
pub mod web;
