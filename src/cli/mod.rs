//! CLI front ends: interactive chat shell and one-shot output formatting.

pub mod chat;
pub mod output;
