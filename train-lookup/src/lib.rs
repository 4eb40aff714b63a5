//! Train schedule lookup.
//!
//! A small interactive tool that answers: "which trains run from this
//! station to that station, cheapest or earliest first?" The schedule is a
//! local `data.json` file loaded once at startup; a search returns at most
//! three records.

pub mod dataset;
pub mod domain;
pub mod search;
