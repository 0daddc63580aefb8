//! Game implementations built on the core, card, zone and rule modules.

pub mod klondike;
