use serde::{Deserialize, Serialize};
use shrinkwraprs::Shrinkwrap;
use std::fmt;

/// Organism ID
#[derive(Copy, Clone, Default, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct OrganismId(pub u32);

/// Genome ID
#[derive(Copy, Clone, Default, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct GenomeId(pub u32);

/// Experiment ID
#[derive(Copy, Clone, Default, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct ExperimentId(pub u32);

/// Notebook ID
#[derive(Copy, Clone, Default, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct NotebookId(pub u32);

/// User group ID
#[derive(Copy, Clone, Default, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct GroupId(pub u32);

/// CoGe user ID
#[derive(Copy, Clone, Default, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct UserId(pub u32);

/// Feature ID. Feature IDs run much higher than the others, e.g. `341489236`.
#[derive(Copy, Clone, Default, Shrinkwrap, Serialize, Deserialize, Debug, Hash, Eq, PartialEq)]
pub struct FeatureId(pub u64);

macro_rules! id_conversions {
    ($($id:ident($inner:ty)),*) => {
        $(
            impl From<$inner> for $id {
                fn from(value: $inner) -> Self {
                    Self(value)
                }
            }

            impl fmt::Display for $id {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    self.0.fmt(f)
                }
            }
        )*
    };
}

id_conversions!(
    OrganismId(u32),
    GenomeId(u32),
    ExperimentId(u32),
    NotebookId(u32),
    GroupId(u32),
    UserId(u32),
    FeatureId(u64)
);
