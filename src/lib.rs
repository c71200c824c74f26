//! Configuration for a logger that forwards records to a Graylog server.
//!
//! See [`config::Config`] for the settings surface, [`config::EnvConfig`] and
//! [`config::RecordConfig`] for the two sources, and
//! [`config::LoggerSettings`] for the resolved snapshot.

pub mod config;
