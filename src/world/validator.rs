use std::collections::HashMap;

use super::model::World;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Audits a built world: every neighbour link must point at a real
/// location that links back on the opposite heading, and every item name
/// must live in exactly one place.
pub fn validate_world(world: &World) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if world.location(world.current_id()).is_none() {
        errors.push(ValidationError::new(format!(
            "current location #{} does not exist",
            world.current_id().index()
        )));
    }

    // Neighbour symmetry
    for (id, loc) in world.locations() {
        for (direction, other_id) in loc.neighbours() {
            let Some(other) = world.location(other_id) else {
                errors.push(ValidationError::new(format!(
                    "location '{}' {} neighbour #{} does not exist",
                    loc.name(),
                    direction,
                    other_id.index()
                )));
                continue;
            };

            if other.neighbour(direction.opposite()) != Some(id) {
                errors.push(ValidationError::new(format!(
                    "location '{}' links {} to '{}' but '{}' does not link {} back",
                    loc.name(),
                    direction,
                    other.name(),
                    other.name(),
                    direction.opposite()
                )));
            }
        }
    }

    // Each item name held once, either by a location or by the player
    let mut holders: HashMap<&str, Vec<String>> = HashMap::new();
    for (_, loc) in world.locations() {
        for item in loc.content() {
            holders
                .entry(item.name())
                .or_default()
                .push(format!("location '{}'", loc.name()));
        }
    }
    for item in world.collected_items() {
        holders
            .entry(item.name())
            .or_default()
            .push("collected items".to_string());
    }

    let mut duplicates: Vec<(&str, Vec<String>)> = holders
        .into_iter()
        .filter(|(_, places)| places.len() > 1)
        .collect();
    duplicates.sort_by(|a, b| a.0.cmp(b.0));

    for (name, places) in duplicates {
        errors.push(ValidationError::new(format!(
            "item '{}' is held in more than one place: {}",
            name,
            places.join(", ")
        )));
    }

    errors
}
