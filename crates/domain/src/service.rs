//! Service — a capacity-bounded department holding robots and supplements.
//!
//! A [`MainService`](ServiceType::MainService) only takes male robots and a
//! [`SecondaryService`](ServiceType::SecondaryService) only takes female ones.
//! The variant is fixed at creation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CapacityError, InvalidArgumentError, RobotServiceError, ValidationError};
use crate::id::{RobotId, ServiceId};
use crate::robot::{Robot, RobotType};
use crate::supplement::Supplement;

/// The closed set of service variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    MainService,
    SecondaryService,
}

impl ServiceType {
    /// Robot slots a service of this type gets unless configured otherwise.
    #[must_use]
    pub fn default_capacity(self) -> usize {
        match self {
            Self::MainService => 30,
            Self::SecondaryService => 15,
        }
    }

    /// Whether a robot of `robot_type` may be assigned to this service.
    #[must_use]
    pub fn accepts(self, robot_type: RobotType) -> bool {
        matches!(
            (self, robot_type),
            (Self::MainService, RobotType::MaleRobot)
                | (Self::SecondaryService, RobotType::FemaleRobot)
        )
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MainService => "MainService",
            Self::SecondaryService => "SecondaryService",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MainService" => Ok(Self::MainService),
            "SecondaryService" => Ok(Self::SecondaryService),
            other => Err(InvalidArgumentError {
                family: "service",
                value: other.to_string(),
            }),
        }
    }
}

/// A department with an ordered robot roster and installed supplements.
#[derive(Debug, Clone)]
pub struct Service {
    id: ServiceId,
    service_type: ServiceType,
    name: String,
    capacity: usize,
    robots: Vec<Robot>,
    supplements: Vec<Supplement>,
}

impl Service {
    /// Create an empty service with the default capacity of `service_type`.
    ///
    /// # Errors
    ///
    /// Returns [`RobotServiceError::Validation`] when `name` is blank.
    pub fn new(
        service_type: ServiceType,
        name: impl Into<String>,
    ) -> Result<Self, RobotServiceError> {
        Self::with_capacity(service_type, name, service_type.default_capacity())
    }

    /// Create an empty service with an explicit robot capacity.
    ///
    /// # Errors
    ///
    /// Returns [`RobotServiceError::Validation`] when `name` is blank.
    pub fn with_capacity(
        service_type: ServiceType,
        name: impl Into<String>,
        capacity: usize,
    ) -> Result<Self, RobotServiceError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(Self {
            id: ServiceId::new(),
            service_type,
            name,
            capacity,
            robots: Vec::new(),
            supplements: Vec::new(),
        })
    }

    #[must_use]
    pub fn id(&self) -> ServiceId {
        self.id
    }

    #[must_use]
    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Robots in insertion order.
    #[must_use]
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    /// Installed supplements in insertion order.
    #[must_use]
    pub fn supplements(&self) -> &[Supplement] {
        &self.supplements
    }

    /// Replace the service's name.
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

    /// Append a robot to the roster.
    ///
    /// # Errors
    ///
    /// Returns [`RobotServiceError::CapacityExceeded`] when every slot is taken.
    pub fn add_robot(&mut self, robot: Robot) -> Result<(), RobotServiceError> {
        if self.robots.len() >= self.capacity {
            return Err(CapacityError {
                service: self.name.clone(),
                capacity: self.capacity,
            }
            .into());
        }
        self.robots.push(robot);
        Ok(())
    }

    /// Remove the robot with `id`, if it is assigned here.
    pub fn remove_robot(&mut self, id: RobotId) -> Option<Robot> {
        let index = self.robots.iter().position(|robot| robot.id() == id)?;
        Some(self.robots.remove(index))
    }

    pub fn add_supplement(&mut self, supplement: Supplement) {
        self.supplements.push(supplement);
    }

    /// Feed every robot once, in roster order.
    pub fn feeding(&mut self) {
        for robot in &mut self.robots {
            robot.eat();
        }
    }

    #[must_use]
    pub fn sum_hardness(&self) -> u32 {
        self.supplements.iter().map(Supplement::hardness).sum()
    }

    /// Sum of every robot price and every supplement price.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        let robots: f64 = self.robots.iter().map(Robot::price).sum();
        let supplements: f64 = self.supplements.iter().map(Supplement::price).sum();
        robots + supplements
    }

    /// Three-line report: header, robot names, supplement summary.
    #[must_use]
    pub fn statistics(&self) -> String {
        let robots = if self.robots.is_empty() {
            "none".to_string()
        } else {
            self.robots
                .iter()
                .map(Robot::name)
                .collect::<Vec<_>>()
                .join(" ")
        };
        format!(
            "{} {}:\nRobots: {}\nSupplements: {} Hardness: {}",
            self.name,
            self.service_type,
            robots,
            self.supplements.len(),
            self.sum_hardness()
        )
    }
}
