//! Startup seeding — replays the configured entities through the controller.
//!
//! Each entry goes through the same controller operation an interactive
//! caller would use, so every business rule applies. A failing entry is
//! logged and skipped; the rest of the seed still runs.

use robot_service_app::ports::SupplementRepository;
use robot_service_app::services::controller::Controller;
use robot_service_domain::error::RobotServiceError;

use crate::config::SeedConfig;

/// Outcome counts of a seeding run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub applied: usize,
    pub failed: usize,
}

impl SeedReport {
    fn record(&mut self, what: &str, result: Result<String, RobotServiceError>) {
        match result {
            Ok(message) => {
                tracing::info!(what, %message, "seed entry applied");
                self.applied += 1;
            }
            Err(err) => {
                tracing::warn!(what, %err, "seed entry rejected");
                self.failed += 1;
            }
        }
    }
}

/// Apply `seed` to `controller`: services first, then supplements, then robots.
pub fn apply<R: SupplementRepository>(
    controller: &mut Controller<R>,
    seed: &SeedConfig,
) -> SeedReport {
    let mut report = SeedReport::default();

    for service in &seed.services {
        let result = controller.add_service(service.service_type.as_str(), &service.name);
        report.record("service", result);
    }

    for supplement in &seed.supplements {
        let supplement_type = supplement.supplement_type.as_str();
        let mut result = controller.add_supplement(supplement_type);
        if result.is_ok()
            && let Some(service) = &supplement.service
        {
            result = controller.supplement_for_service(service, supplement_type);
        }
        report.record("supplement", result);
    }

    for robot in &seed.robots {
        let result = controller.add_robot(
            &robot.service,
            robot.robot_type.as_str(),
            &robot.name,
            &robot.kind,
            robot.price,
        );
        report.record("robot", result);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use robot_service_app::in_memory::InMemorySupplementRepository;

    fn seed_from(toml: &str) -> SeedConfig {
        toml::from_str::<Config>(toml).unwrap().seed
    }

    #[test]
    fn should_apply_every_valid_entry() {
        let seed = seed_from(
            "
            [[seed.services]]
            type = 'MainService'
            name = 'Alpha'

            [[seed.supplements]]
            type = 'MetalArmor'
            service = 'Alpha'

            [[seed.supplements]]
            type = 'PlasticArmor'

            [[seed.robots]]
            service = 'Alpha'
            type = 'MaleRobot'
            name = 'Rob'
            kind = 'Welder'
            price = 120.0
            ",
        );
        let mut controller = Controller::new(InMemorySupplementRepository::new());

        let report = apply(&mut controller, &seed);

        assert_eq!(report, SeedReport { applied: 4, failed: 0 });
        let alpha = controller.find_service("Alpha").unwrap();
        assert_eq!(alpha.supplements().len(), 1);
        assert_eq!(alpha.robots().len(), 1);
        assert_eq!(controller.supplements().len(), 1);
    }

    #[test]
    fn should_skip_failing_entries_and_continue() {
        let seed = seed_from(
            "
            [[seed.services]]
            type = 'MainService'
            name = ''

            [[seed.services]]
            type = 'SecondaryService'
            name = 'Beta'

            [[seed.robots]]
            service = 'Beta'
            type = 'FemaleRobot'
            name = 'Ada'
            kind = 'Painter'
            price = -1.0

            [[seed.robots]]
            service = 'Beta'
            type = 'FemaleRobot'
            name = 'Eve'
            kind = 'Painter'
            price = 3.0
            ",
        );
        let mut controller = Controller::new(InMemorySupplementRepository::new());

        let report = apply(&mut controller, &seed);

        assert_eq!(report, SeedReport { applied: 2, failed: 2 });
        assert_eq!(controller.services().len(), 1);
        assert_eq!(
            controller.statistics(),
            "Beta SecondaryService:\nRobots: Eve\nSupplements: 0 Hardness: 0"
        );
    }
}
