//! Gameplay integration tests

mod gameplay;
