//! Robot — a unit that can be assigned to a service and fed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InvalidArgumentError, RobotServiceError, ValidationError};
use crate::id::RobotId;

/// The closed set of robot variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RobotType {
    MaleRobot,
    FemaleRobot,
}

impl RobotType {
    /// Weight a freshly built robot starts with.
    #[must_use]
    pub fn initial_kilograms(self) -> u32 {
        match self {
            Self::MaleRobot => 9,
            Self::FemaleRobot => 7,
        }
    }

    /// Weight gained per meal.
    #[must_use]
    pub fn kilograms_per_meal(self) -> u32 {
        match self {
            Self::MaleRobot => 3,
            Self::FemaleRobot => 1,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MaleRobot => "MaleRobot",
            Self::FemaleRobot => "FemaleRobot",
        }
    }
}

impl fmt::Display for RobotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RobotType {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MaleRobot" => Ok(Self::MaleRobot),
            "FemaleRobot" => Ok(Self::FemaleRobot),
            other => Err(InvalidArgumentError {
                family: "robot",
                value: other.to_string(),
            }),
        }
    }
}

/// A robot with a validated name, kind and price.
#[derive(Debug, Clone, PartialEq)]
pub struct Robot {
    id: RobotId,
    robot_type: RobotType,
    name: String,
    kind: String,
    kilograms: u32,
    price: f64,
}

impl Robot {
    /// Create a builder for constructing a [`Robot`].
    #[must_use]
    pub fn builder(robot_type: RobotType) -> RobotBuilder {
        RobotBuilder {
            robot_type,
            name: None,
            kind: None,
            price: None,
        }
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RobotServiceError::Validation`] when `name` or `kind` is
    /// blank, or when `price` is not strictly positive.
    pub fn validate(&self) -> Result<(), RobotServiceError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.kind.trim().is_empty() {
            return Err(ValidationError::EmptyKind.into());
        }
        // NaN fails `> 0.0` as well
        if !(self.price > 0.0 && self.price.is_finite()) {
            return Err(ValidationError::NonPositivePrice(self.price).into());
        }
        Ok(())
    }

    #[must_use]
    pub fn id(&self) -> RobotId {
        self.id
    }

    #[must_use]
    pub fn robot_type(&self) -> RobotType {
        self.robot_type
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn kilograms(&self) -> u32 {
        self.kilograms
    }

    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Replace the robot's name.
    ///
    /// # Errors
    ///
    /// Returns [`RobotServiceError::Validation`] when `name` is blank; the
    /// previous name is kept.
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), RobotServiceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.name = name;
        Ok(())
    }

    /// Feed the robot once.
    pub fn eat(&mut self) {
        self.kilograms = self
            .kilograms
            .saturating_add(self.robot_type.kilograms_per_meal());
    }
}

/// Step-by-step builder for [`Robot`].
#[derive(Debug)]
pub struct RobotBuilder {
    robot_type: RobotType,
    name: Option<String>,
    kind: Option<String>,
    price: Option<f64>,
}

impl RobotBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Consume the builder, validate, and return a [`Robot`].
    ///
    /// # Errors
    ///
    /// Returns [`RobotServiceError::Validation`] if `name` or `kind` is
    /// missing or blank, or if `price` is missing or not strictly positive.
    pub fn build(self) -> Result<Robot, RobotServiceError> {
        let robot = Robot {
            id: RobotId::new(),
            robot_type: self.robot_type,
            name: self.name.unwrap_or_default(),
            kind: self.kind.unwrap_or_default(),
            kilograms: self.robot_type.initial_kilograms(),
            price: self.price.unwrap_or_default(),
        };
        robot.validate()?;
        Ok(robot)
    }
}
