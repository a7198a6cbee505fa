//! Reusable UI widgets for auto-launcher.

pub mod candidate_list;
