//! Reads documents through a remote Apache Tika server.
//!
//! A resource's bytes are sent with `PUT /tika`, the plain text answer is cleaned up by a
//! [`TextFormatter`](application::ports::TextFormatter) and returned as a single
//! [`Document`](domain::Document) whose `source` metadata names the resource.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
