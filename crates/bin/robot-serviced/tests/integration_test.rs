//! End-to-end scenarios for the full robot-service stack.
//!
//! Each test wires the real in-memory repository into the real controller
//! and drives it only through the public operations.

use robot_service_app::in_memory::InMemorySupplementRepository;
use robot_service_app::messages;
use robot_service_app::ports::SupplementRepository;
use robot_service_app::services::controller::{Capacities, Controller};
use robot_service_domain::error::RobotServiceError;
use robot_service_domain::supplement::SupplementType;

fn controller() -> Controller<InMemorySupplementRepository> {
    Controller::new(InMemorySupplementRepository::new())
}

// ---------------------------------------------------------------------------
// Full workday
// ---------------------------------------------------------------------------

#[test]
fn should_run_a_full_workday() {
    let mut ctl = controller();

    ctl.add_service("MainService", "Forge").unwrap();
    ctl.add_service("SecondaryService", "Atelier").unwrap();
    ctl.add_supplement("MetalArmor").unwrap();
    ctl.add_supplement("PlasticArmor").unwrap();
    ctl.add_supplement("PlasticArmor").unwrap();

    ctl.supplement_for_service("Forge", "MetalArmor").unwrap();
    ctl.supplement_for_service("Atelier", "PlasticArmor").unwrap();

    ctl.add_robot("Forge", "MaleRobot", "Bolt", "Welder", 10.0)
        .unwrap();
    ctl.add_robot("Forge", "MaleRobot", "Nut", "Riveter", 20.0)
        .unwrap();
    ctl.add_robot("Atelier", "FemaleRobot", "Iris", "Painter", 7.5)
        .unwrap();

    assert_eq!(ctl.feeding_robot("Forge"), "Robots fed: 2");
    assert_eq!(
        ctl.sum_of_all("Forge"),
        "The value of service Forge is 45.00."
    );
    assert_eq!(
        ctl.sum_of_all("Atelier"),
        "The value of service Atelier is 17.50."
    );
    assert_eq!(
        ctl.statistics(),
        "Forge MainService:\nRobots: Bolt Nut\nSupplements: 1 Hardness: 5\n\
         Atelier SecondaryService:\nRobots: Iris\nSupplements: 1 Hardness: 1"
    );
    assert_eq!(ctl.supplements().count_of(SupplementType::PlasticArmor), 1);
    assert_eq!(ctl.supplements().count_of(SupplementType::MetalArmor), 0);
}

// ---------------------------------------------------------------------------
// Business rules
// ---------------------------------------------------------------------------

#[test]
fn should_value_robots_and_supplements_together() {
    let mut ctl = controller();
    ctl.add_service("MainService", "Alpha").unwrap();
    ctl.add_robot("Alpha", "MaleRobot", "A", "Welder", 10.0)
        .unwrap();
    ctl.add_robot("Alpha", "MaleRobot", "B", "Welder", 20.0)
        .unwrap();

    ctl.add_supplement("PlasticArmor").unwrap();
    ctl.supplement_for_service("Alpha", "PlasticArmor").unwrap();

    assert_eq!(
        ctl.sum_of_all("Alpha"),
        "The value of service Alpha is 40.00."
    );
}

#[test]
fn should_never_seat_female_robot_in_main_service() {
    let mut ctl = controller();
    ctl.add_service("MainService", "Alpha").unwrap();

    for i in 0..3 {
        let msg = ctl
            .add_robot("Alpha", "FemaleRobot", &format!("F{i}"), "Painter", 1.0)
            .unwrap();
        assert_eq!(msg, messages::UNSUITABLE_SERVICE);
    }
    assert!(ctl.find_service("Alpha").unwrap().robots().is_empty());
}

#[test]
fn should_fill_service_to_capacity_then_reject() {
    let mut ctl = Controller::with_capacities(
        InMemorySupplementRepository::new(),
        Capacities {
            main: 3,
            secondary: 1,
        },
    );
    ctl.add_service("SecondaryService", "Beta").unwrap();

    ctl.add_robot("Beta", "FemaleRobot", "Ada", "Painter", 1.0)
        .unwrap();
    let result = ctl.add_robot("Beta", "FemaleRobot", "Eve", "Painter", 1.0);

    assert!(matches!(result, Err(RobotServiceError::CapacityExceeded(_))));
    assert_eq!(
        ctl.statistics(),
        "Beta SecondaryService:\nRobots: Ada\nSupplements: 0 Hardness: 0"
    );
}

#[test]
fn should_surface_each_error_kind() {
    let mut ctl = controller();

    assert!(matches!(
        ctl.add_service("Garage", "Alpha"),
        Err(RobotServiceError::InvalidArgument(_))
    ));
    assert!(matches!(
        ctl.add_supplement("WoodenArmor"),
        Err(RobotServiceError::InvalidArgument(_))
    ));
    assert!(matches!(
        ctl.supplement_for_service("Alpha", "MetalArmor"),
        Err(RobotServiceError::NotFound(_))
    ));
    assert!(matches!(
        ctl.add_robot("Alpha", "MaleRobot", "", "Welder", 1.0),
        Err(RobotServiceError::Validation(_))
    ));
    assert!(ctl.services().is_empty());
    assert!(ctl.supplements().is_empty());
}
