//! Commute dashboard server.
//!
//! Answers "which trains can I catch between home and work in the next
//! hour, either way?" from live Darwin boards, plus a local info endpoint
//! with today's weather and the next departures.

pub mod config;
pub mod darwin;
pub mod domain;
pub mod timetable;
pub mod weather;
pub mod web;
