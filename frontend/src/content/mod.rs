//! Static page content. Everything here is fixed at compile time.

pub mod budget;
pub mod gameplay;
pub mod impact;
pub mod project;
pub mod rooms;
pub mod schedule;
pub mod team;
pub mod world;
