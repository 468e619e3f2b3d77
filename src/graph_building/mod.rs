//! Graph building domain
//!
//! Pure model of artifacts and their dependency graph, plus the services
//! and policies that decide which declared dependencies become edges.

pub mod domain;
pub mod policies;
pub mod services;
