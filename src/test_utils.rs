//! Test utilities for common test setup.
//!
//! This module provides shared record builders used across multiple test modules.

#[cfg(test)]
use crate::state::{Character, LocationRef, Status};

#[cfg(test)]
/// What: Build an alive character with no episodes and an empty location.
///
/// Inputs:
/// - `id`: Catalog id
/// - `name`: Display name
///
/// Output: Minimal `Character`
pub fn character(id: u32, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: Status::Alive,
        species: "Human".to_string(),
        gender: String::new(),
        location: LocationRef::default(),
        episode: Vec::new(),
        image: String::new(),
        url: format!("https://rickandmortyapi.com/api/character/{id}"),
    }
}

#[cfg(test)]
/// What: Build a character with a given status, episode count and location name.
///
/// Inputs:
/// - `id`, `name`: Identity
/// - `status`: Life status
/// - `episodes`: Number of synthetic episode URLs
/// - `location`: Location name
///
/// Output: Populated `Character`
pub fn character_with(
    id: u32,
    name: &str,
    status: Status,
    episodes: usize,
    location: &str,
) -> Character {
    Character {
        status,
        episode: (1..=episodes)
            .map(|n| format!("https://rickandmortyapi.com/api/episode/{n}"))
            .collect(),
        location: LocationRef {
            name: location.to_string(),
            url: String::new(),
        },
        ..character(id, name)
    }
}
