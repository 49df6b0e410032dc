//! Supplement — an armor part that can be installed into a service.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidArgumentError;
use crate::id::SupplementId;

/// The closed set of supplement variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplementType {
    PlasticArmor,
    MetalArmor,
}

impl SupplementType {
    /// Hardness every supplement of this type is built with.
    #[must_use]
    pub fn hardness(self) -> u32 {
        match self {
            Self::PlasticArmor => 1,
            Self::MetalArmor => 5,
        }
    }

    /// Price every supplement of this type is built with.
    #[must_use]
    pub fn price(self) -> f64 {
        match self {
            Self::PlasticArmor => 10.0,
            Self::MetalArmor => 15.0,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PlasticArmor => "PlasticArmor",
            Self::MetalArmor => "MetalArmor",
        }
    }
}

impl fmt::Display for SupplementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupplementType {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PlasticArmor" => Ok(Self::PlasticArmor),
            "MetalArmor" => Ok(Self::MetalArmor),
            other => Err(InvalidArgumentError {
                family: "supplement",
                value: other.to_string(),
            }),
        }
    }
}

/// An installable part. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Supplement {
    id: SupplementId,
    supplement_type: SupplementType,
    price: f64,
    hardness: u32,
}

impl Supplement {
    /// Build a fresh supplement with the defaults of `supplement_type`.
    #[must_use]
    pub fn new(supplement_type: SupplementType) -> Self {
        Self {
            id: SupplementId::new(),
            supplement_type,
            price: supplement_type.price(),
            hardness: supplement_type.hardness(),
        }
    }

    #[must_use]
    pub fn id(&self) -> SupplementId {
        self.id
    }

    #[must_use]
    pub fn supplement_type(&self) -> SupplementType {
        self.supplement_type
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    #[must_use]
    pub fn hardness(&self) -> u32 {
        self.hardness
    }
}
