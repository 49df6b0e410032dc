//! Controller — the use-cases of the robot-servicing business.
//!
//! Services are kept in creation order and looked up by name with a linear
//! scan. Names are not unique: operations keyed by name apply to every
//! matching service, except `add_robot`, which only considers the first.

use robot_service_domain::error::{NotFoundError, RobotServiceError};
use robot_service_domain::robot::{Robot, RobotType};
use robot_service_domain::service::{Service, ServiceType};
use robot_service_domain::supplement::{Supplement, SupplementType};

use crate::messages;
use crate::ports::SupplementRepository;

/// Robot slots given to newly created services, per service type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacities {
    pub main: usize,
    pub secondary: usize,
}

impl Capacities {
    #[must_use]
    pub fn for_type(self, service_type: ServiceType) -> usize {
        match service_type {
            ServiceType::MainService => self.main,
            ServiceType::SecondaryService => self.secondary,
        }
    }
}

impl Default for Capacities {
    fn default() -> Self {
        Self {
            main: ServiceType::MainService.default_capacity(),
            secondary: ServiceType::SecondaryService.default_capacity(),
        }
    }
}

/// Orchestrates services, supplement stock and robot assignment.
pub struct Controller<R> {
    supplements: R,
    services: Vec<Service>,
    capacities: Capacities,
}

impl<R: SupplementRepository> Controller<R> {
    /// Create a controller with the default capacity per service type.
    pub fn new(supplements: R) -> Self {
        Self::with_capacities(supplements, Capacities::default())
    }

    /// Create a controller whose new services get `capacities` robot slots.
    pub fn with_capacities(supplements: R, capacities: Capacities) -> Self {
        Self {
            supplements,
            services: Vec::new(),
            capacities,
        }
    }

    /// Every service, in creation order.
    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    /// Supplements still in stock.
    #[must_use]
    pub fn supplements(&self) -> &R {
        &self.supplements
    }

    /// First service named `name`.
    #[must_use]
    pub fn find_service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.name() == name)
    }

    /// Create a service of `service_type` and append it.
    ///
    /// # Errors
    ///
    /// Returns [`RobotServiceError::InvalidArgument`] for an unknown type tag,
    /// or [`RobotServiceError::Validation`] when `name` is blank.
    #[tracing::instrument(skip(self))]
    pub fn add_service(
        &mut self,
        service_type: &str,
        name: &str,
    ) -> Result<String, RobotServiceError> {
        let service_type: ServiceType = service_type.parse()?;
        let service =
            Service::with_capacity(service_type, name, self.capacities.for_type(service_type))?;
        tracing::info!(
            service_id = %service.id(),
            capacity = service.capacity(),
            "service created"
        );
        self.services.push(service);
        Ok(messages::service_added(service_type))
    }

    /// Put a fresh supplement of `supplement_type` into stock.
    ///
    /// # Errors
    ///
    /// Returns [`RobotServiceError::InvalidArgument`] for an unknown type tag.
    #[tracing::instrument(skip(self))]
    pub fn add_supplement(&mut self, supplement_type: &str) -> Result<String, RobotServiceError> {
        let supplement_type: SupplementType = supplement_type.parse()?;
        let supplement = Supplement::new(supplement_type);
        tracing::info!(supplement_id = %supplement.id(), "supplement stocked");
        self.supplements.add(supplement);
        Ok(messages::supplement_added(supplement_type))
    }

    /// Move one supplement of `supplement_type` from stock into every service
    /// named `service_name`.
    ///
    /// Each matching service takes the next unit of stock. When stock runs out
    /// part-way, the remaining matches get nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RobotServiceError::NotFound`] when no supplement with the tag
    /// `supplement_type` is in stock, including when the tag names no known type.
    #[tracing::instrument(skip(self))]
    pub fn supplement_for_service(
        &mut self,
        service_name: &str,
        supplement_type: &str,
    ) -> Result<String, RobotServiceError> {
        let not_found = || NotFoundError {
            entity: "supplement",
            key: supplement_type.to_string(),
        };
        let supplement_type: SupplementType =
            supplement_type.parse().map_err(|_| not_found())?;
        if self.supplements.find_first(supplement_type).is_none() {
            return Err(not_found().into());
        }

        let matching = self
            .services
            .iter_mut()
            .filter(|service| service.name() == service_name);
        for service in matching {
            let Some(id) = self
                .supplements
                .find_first(supplement_type)
                .map(Supplement::id)
            else {
                tracing::warn!(service_id = %service.id(), "supplement stock exhausted");
                break;
            };
            if let Some(supplement) = self.supplements.remove(id) {
                service.add_supplement(supplement);
            }
        }

        Ok(messages::supplement_installed(supplement_type, service_name))
    }

    /// Build a robot and assign it to the first service named `service_name`.
    ///
    /// A type mismatch between robot and service, or a missing service, is
    /// reported in the returned message rather than as an error.
    ///
    /// # Errors
    ///
    /// Returns [`RobotServiceError::InvalidArgument`] for an unknown type tag,
    /// [`RobotServiceError::Validation`] when the robot fails its invariants,
    /// or [`RobotServiceError::CapacityExceeded`] when the service is full.
    #[tracing::instrument(skip(self))]
    pub fn add_robot(
        &mut self,
        service_name: &str,
        robot_type: &str,
        robot_name: &str,
        robot_kind: &str,
        price: f64,
    ) -> Result<String, RobotServiceError> {
        let robot_type: RobotType = robot_type.parse()?;
        let robot = Robot::builder(robot_type)
            .name(robot_name)
            .kind(robot_kind)
            .price(price)
            .build()?;

        let Some(service) = self
            .services
            .iter_mut()
            .find(|service| service.name() == service_name)
        else {
            return Ok(messages::no_such_service(service_name));
        };
        if !service.service_type().accepts(robot_type) {
            return Ok(messages::UNSUITABLE_SERVICE.to_string());
        }

        let robot_id = robot.id();
        service.add_robot(robot)?;
        tracing::info!(
            %robot_id,
            service_id = %service.id(),
            "robot assigned"
        );
        Ok(messages::robot_added(robot_type, service_name))
    }

    /// Feed the robots of every service named `service_name`.
    ///
    /// The reported count is the robot count of the last matching service.
    #[tracing::instrument(skip(self))]
    pub fn feeding_robot(&mut self, service_name: &str) -> String {
        let mut fed = 0;
        for service in self
            .services
            .iter_mut()
            .filter(|service| service.name() == service_name)
        {
            service.feeding();
            for robot in service.robots() {
                tracing::debug!(
                    robot = robot.name(),
                    kilograms = robot.kilograms(),
                    "robot fed"
                );
            }
            fed = service.robots().len();
        }
        messages::robots_fed(fed)
    }

    /// Total robot and supplement price across every service named
    /// `service_name`.
    #[must_use]
    pub fn sum_of_all(&self, service_name: &str) -> String {
        let value: f64 = self
            .services
            .iter()
            .filter(|service| service.name() == service_name)
            .map(Service::total_price)
            .sum();
        messages::service_value(service_name, value)
    }

    /// Statistics of every service, one block per service, newline-joined.
    #[must_use]
    pub fn statistics(&self) -> String {
        self.services
            .iter()
            .map(Service::statistics)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
