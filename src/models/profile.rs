use std::fmt;

use serde::{Deserialize, Serialize};

/// Bird species covered by the norm table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Species {
    Chicken,
    Duck,
    Turkey,
    Quail,
    Goose,
}

impl Species {
    pub const ALL: [Species; 5] = [
        Species::Chicken,
        Species::Duck,
        Species::Turkey,
        Species::Quail,
        Species::Goose,
    ];
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Species::Chicken => "Chicken",
            Species::Duck => "Duck",
            Species::Turkey => "Turkey",
            Species::Quail => "Quail",
            Species::Goose => "Goose",
        };
        write!(f, "{}", s)
    }
}

/// What the flock is being fed for.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Goal {
    EggLaying,
    Fattening,
    Growth,
    Maintenance,
}

impl Goal {
    pub const ALL: [Goal; 4] = [
        Goal::EggLaying,
        Goal::Fattening,
        Goal::Growth,
        Goal::Maintenance,
    ];
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Goal::EggLaying => "Egg laying",
            Goal::Fattening => "Fattening",
            Goal::Growth => "Growth",
            Goal::Maintenance => "Maintenance",
        };
        write!(f, "{}", s)
    }
}

/// Age class of the birds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum AgeClass {
    Young,
    Adult,
    Laying,
    Broiler,
}

impl AgeClass {
    pub const ALL: [AgeClass; 4] = [
        AgeClass::Young,
        AgeClass::Adult,
        AgeClass::Laying,
        AgeClass::Broiler,
    ];
}

impl fmt::Display for AgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AgeClass::Young => "Young",
            AgeClass::Adult => "Adult",
            AgeClass::Laying => "Laying",
            AgeClass::Broiler => "Broiler",
        };
        write!(f, "{}", s)
    }
}

/// The full bird profile a mix is formulated for.
///
/// Norm ranges are keyed by the complete triple; not every combination has
/// an entry in the norm table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BirdProfile {
    pub species: Species,
    pub goal: Goal,
    pub age_class: AgeClass,
}

impl BirdProfile {
    pub fn new(species: Species, goal: Goal, age_class: AgeClass) -> Self {
        Self {
            species,
            goal,
            age_class,
        }
    }
}

impl fmt::Display for BirdProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} / {}", self.species, self.goal, self.age_class)
    }
}
