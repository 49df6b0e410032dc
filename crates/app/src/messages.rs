//! Confirmation messages returned by the controller.

use robot_service_domain::robot::RobotType;
use robot_service_domain::service::ServiceType;
use robot_service_domain::supplement::SupplementType;

/// A robot's type does not match the service it was sent to.
pub const UNSUITABLE_SERVICE: &str = "Unsuitable service.";

#[must_use]
pub fn service_added(service_type: ServiceType) -> String {
    format!("{service_type} is successfully added.")
}

#[must_use]
pub fn supplement_added(supplement_type: SupplementType) -> String {
    format!("{supplement_type} is successfully added.")
}

#[must_use]
pub fn supplement_installed(supplement_type: SupplementType, service_name: &str) -> String {
    format!("Successfully added {supplement_type} to {service_name}.")
}

#[must_use]
pub fn robot_added(robot_type: RobotType, service_name: &str) -> String {
    format!("Successfully added {robot_type} to {service_name}.")
}

#[must_use]
pub fn no_such_service(service_name: &str) -> String {
    format!("No service found with name {service_name}.")
}

#[must_use]
pub fn robots_fed(count: usize) -> String {
    format!("Robots fed: {count}")
}

#[must_use]
pub fn service_value(service_name: &str, value: f64) -> String {
    format!("The value of service {service_name} is {value:.2}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_format_value_with_two_decimals() {
        assert_eq!(
            service_value("Alpha", 35.0),
            "The value of service Alpha is 35.00."
        );
        assert_eq!(
            service_value("Alpha", 1.005_1),
            "The value of service Alpha is 1.01."
        );
    }

    #[test]
    fn should_echo_type_tags() {
        assert_eq!(
            service_added(ServiceType::SecondaryService),
            "SecondaryService is successfully added."
        );
        assert_eq!(
            robot_added(RobotType::MaleRobot, "Alpha"),
            "Successfully added MaleRobot to Alpha."
        );
    }
}
