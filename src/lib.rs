//! Backend API for the OpsVantage Digital agency website
//!
//! Accepts contact forms, newsletter signups and service inquiries, serves
//! the digital product catalog, answers chat messages with canned replies and
//! reports aggregate counters. Everything is stored in an embedded redb file.

pub mod config;
pub mod database;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod model;
pub mod responder;
pub mod route;
pub mod seed;
