use crate::door::DoorContent;
use crate::error::SimulationError;
use crate::strategy::Strategy;

/// Outcome counters of a single strategy.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct Tally {
    /// Trials whose final door hid the car.
    pub success_count: u64,
    /// Trials whose final door hid a goat.
    pub failure_count: u64,
}

impl Tally {
    /// Number of trials recorded.
    pub fn total(&self) -> u64 {
        self.success_count + self.failure_count
    }

    /// Success and failure rates, or `None` while no trial is recorded.
    pub fn rates(&self) -> Option<(f64, f64)> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let total = total as f64;
        Some((
            self.success_count as f64 / total,
            self.failure_count as f64 / total,
        ))
    }

    fn counter(&self, content: DoorContent) -> u64 {
        match content {
            DoorContent::Car => self.success_count,
            DoorContent::Goat => self.failure_count,
        }
    }

    fn counter_mut(&mut self, content: DoorContent) -> &mut u64 {
        match content {
            DoorContent::Car => &mut self.success_count,
            DoorContent::Goat => &mut self.failure_count,
        }
    }
}

/// Accumulates per-strategy outcomes. Counters only ever grow.
#[derive(Debug, Default, Clone)]
pub struct ResultAggregator {
    tallies: [Tally; Strategy::COUNT],
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one trial of `strategy` that ended on a door hiding `content`.
    pub fn record_outcome(&mut self, strategy: Strategy, content: DoorContent) {
        *self.tallies[strategy.index()].counter_mut(content) += 1;
    }

    /// Successes for `Car`, failures for `Goat`.
    pub fn score(&self, strategy: Strategy, content: DoorContent) -> u64 {
        self.tallies[strategy.index()].counter(content)
    }

    pub fn tally(&self, strategy: Strategy) -> Tally {
        self.tallies[strategy.index()]
    }

    /// Renders counts and rates of every strategy.
    ///
    /// Fails with [`SimulationError::NoTrialsRecorded`] for the first strategy
    /// that has not been played yet.
    pub fn summary(&self) -> Result<String, SimulationError> {
        let mut msg = String::from("Simulation results:\n");
        for strategy in Strategy::ALL {
            let tally = self.tally(strategy);
            let (success_rate, failure_rate) = tally
                .rates()
                .ok_or(SimulationError::NoTrialsRecorded { strategy })?;
            msg.push_str(&format!(
                "\t{} (`{}`):\n\
                 \t\tSuccess (Car): {}\tRate: {:.4}\n\
                 \t\tFailure (Goat): {}\tRate: {:.4}\n",
                strategy.name(),
                strategy.description(),
                tally.success_count,
                success_rate,
                tally.failure_count,
                failure_rate,
            ));
        }
        Ok(msg)
    }
}

#[cfg(test)]
mod tests {
    use crate::aggregator::{ResultAggregator, Tally};
    use crate::door::DoorContent;
    use crate::error::SimulationError;
    use crate::strategy::Strategy;
    use proptest::prelude::*;

    #[test]
    fn record_then_score_round_trips() {
        for strategy in Strategy::ALL {
            // arrange
            let mut results = ResultAggregator::new();

            // act
            results.record_outcome(strategy, DoorContent::Car);

            // assert
            assert_eq!(results.score(strategy, DoorContent::Car), 1);
            assert_eq!(results.score(strategy, DoorContent::Goat), 0);
        }
    }

    #[test]
    fn every_combination_is_counted_separately() {
        let mut results = ResultAggregator::new();
        for strategy in Strategy::ALL {
            for content in [DoorContent::Goat, DoorContent::Car] {
                results.record_outcome(strategy, content);
                assert_eq!(results.score(strategy, content), 1);
            }
        }
    }

    #[test]
    fn summary_of_fresh_aggregator_fails() {
        let results = ResultAggregator::new();
        assert_eq!(
            results.summary(),
            Err(SimulationError::NoTrialsRecorded {
                strategy: Strategy::Direct
            })
        );
    }

    #[test]
    fn summary_names_first_unplayed_strategy() {
        // arrange
        let mut results = ResultAggregator::new();
        results.record_outcome(Strategy::Direct, DoorContent::Goat);

        // act
        let summary = results.summary();

        // assert
        assert_eq!(
            summary,
            Err(SimulationError::NoTrialsRecorded {
                strategy: Strategy::SwitchRandom
            })
        );
    }

    #[test]
    fn summary_reports_counts_and_rates() {
        // arrange
        let mut results = ResultAggregator::new();
        for strategy in Strategy::ALL {
            results.record_outcome(strategy, DoorContent::Car);
            results.record_outcome(strategy, DoorContent::Goat);
            results.record_outcome(strategy, DoorContent::Goat);
            results.record_outcome(strategy, DoorContent::Goat);
        }

        // act
        let summary = results.summary().unwrap();

        // assert
        assert!(summary.starts_with("Simulation results:\n"));
        assert!(summary.contains("OPEN_DIRECTLY (`Open a random door directly`)"));
        assert_eq!(summary.matches("Success (Car): 1\tRate: 0.2500").count(), 3);
        assert_eq!(summary.matches("Failure (Goat): 3\tRate: 0.7500").count(), 3);
    }

    #[test]
    fn empty_tally_has_no_rates() {
        assert_eq!(Tally::default().rates(), None);
    }

    proptest! {
        #[test]
        fn tally_total_matches_recorded_trials(
            outcomes in prop::collection::vec(any::<bool>(), 0..200),
        ) {
            let mut results = ResultAggregator::new();
            for &is_car in &outcomes {
                let content = if is_car { DoorContent::Car } else { DoorContent::Goat };
                results.record_outcome(Strategy::SwitchOther, content);
            }

            let tally = results.tally(Strategy::SwitchOther);
            prop_assert_eq!(tally.total(), outcomes.len() as u64);
            prop_assert_eq!(tally.success_count, outcomes.iter().filter(|&&c| c).count() as u64);
            prop_assert_eq!(results.tally(Strategy::Direct).total(), 0);
        }
    }
}
