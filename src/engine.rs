use crate::aggregator::ResultAggregator;
use crate::door::DoorContent;
use crate::error::SimulationError;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use crate::strategy::Strategy;
use tracing::debug;

/// Door count of the classic game.
pub const DEFAULT_DOOR_COUNT: usize = 3;

/// Plays Monty Hall strategies against one fixed door layout.
///
/// The layout is drawn once at construction and reused by every trial. Each
/// successful strategy call records exactly one outcome in the owned
/// [`ResultAggregator`].
pub struct SimulationEngine<K: RandomGenerator> {
    doors: Vec<DoorContent>,
    random: K,
    results: ResultAggregator,
}

/// A builder for creating instances of `SimulationEngine`.
pub struct SimulationEngineBuilder<K: RandomGenerator> {
    door_count: usize,
    random_generator: K,
}

impl<K: RandomGenerator> SimulationEngineBuilder<K> {
    /// Creates a new builder for a layout of `door_count` doors.
    pub fn new(door_count: usize) -> Self {
        Self {
            door_count,
            random_generator: K::default(),
        }
    }

    /// Sets the random number generator used for the layout and every pick.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    /// Lays out the doors. Fails with [`SimulationError::NoDoors`] for zero doors.
    pub fn build(self) -> Result<SimulationEngine<K>, SimulationError> {
        SimulationEngine::new(self.door_count, self.random_generator)
    }
}

impl<K: RandomGenerator> SimulationEngine<K> {
    /// Returns a new builder for `SimulationEngine`.
    pub fn builder(door_count: usize) -> SimulationEngineBuilder<K> {
        SimulationEngineBuilder::new(door_count)
    }

    /// Places one car behind a uniformly random door and goats behind the rest.
    pub fn new(door_count: usize, mut rg: K) -> Result<Self, SimulationError> {
        if door_count == 0 {
            return Err(SimulationError::NoDoors);
        }

        let mut doors = vec![DoorContent::Goat; door_count];
        doors[rg.next_range(0, door_count)] = DoorContent::Car;
        debug!(?doors, "doors laid out");

        Ok(Self {
            doors,
            random: rg,
            results: ResultAggregator::new(),
        })
    }

    pub fn doors(&self) -> &[DoorContent] {
        &self.doors
    }

    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// Outcomes recorded so far.
    pub fn results(&self) -> &ResultAggregator {
        &self.results
    }

    pub fn into_results(self) -> ResultAggregator {
        self.results
    }

    /// Picks a random door and keeps it.
    pub fn simulate_direct(&mut self) -> DoorContent {
        let (_, content) = self.pick_random_door();
        self.results.record_outcome(Strategy::Direct, content);
        content
    }

    /// Picks a door, reveals a goat elsewhere, then picks again among every
    /// door except the revealed one. The second pick may land on the first.
    pub fn simulate_switch_random(&mut self) -> Result<DoorContent, SimulationError> {
        let (selected_index, _) = self.pick_random_door();
        let shown_goat_index = self.pick_goat_index_excluding(&[selected_index])?;
        let (_, content) = self.pick_random_door_excluding(&[shown_goat_index])?;

        self.results.record_outcome(Strategy::SwitchRandom, content);
        Ok(content)
    }

    /// Picks a door, reveals a goat elsewhere, then picks among the doors that
    /// are neither revealed nor first chosen.
    ///
    /// With three doors exactly one candidate remains, so this is the classic
    /// "always switch" play. With more doors the final pick stays random among
    /// the remaining ones.
    pub fn simulate_switch_other(&mut self) -> Result<DoorContent, SimulationError> {
        let (selected_index, _) = self.pick_random_door();
        let shown_goat_index = self.pick_goat_index_excluding(&[selected_index])?;
        let (_, content) = self.pick_random_door_excluding(&[shown_goat_index, selected_index])?;

        self.results.record_outcome(Strategy::SwitchOther, content);
        Ok(content)
    }

    /// Plays one trial of `strategy`.
    pub fn simulate(&mut self, strategy: Strategy) -> Result<DoorContent, SimulationError> {
        match strategy {
            Strategy::Direct => Ok(self.simulate_direct()),
            Strategy::SwitchRandom => self.simulate_switch_random(),
            Strategy::SwitchOther => self.simulate_switch_other(),
        }
    }

    /// Runs `count` trials, each playing every strategy once in [`Strategy::ALL`] order.
    /// Stops at the first failing strategy.
    pub fn run_trials(&mut self, count: u64) -> Result<(), SimulationError> {
        for _ in 0..count {
            for strategy in Strategy::ALL {
                self.simulate(strategy)?;
            }
        }
        Ok(())
    }

    fn pick_random_door(&mut self) -> (usize, DoorContent) {
        let index = self.random.next_range(0, self.doors.len());
        (index, self.doors[index])
    }

    fn doors_excluding(&self, excluded: &[usize]) -> Vec<DoorContent> {
        self.doors
            .iter()
            .enumerate()
            .filter(|(i, _)| !excluded.contains(i))
            .map(|(_, &content)| content)
            .collect()
    }

    /// The returned index points into the remaining doors, not the layout.
    fn pick_random_door_excluding(
        &mut self,
        excluded: &[usize],
    ) -> Result<(usize, DoorContent), SimulationError> {
        let other_doors = self.doors_excluding(excluded);
        if other_doors.is_empty() {
            return Err(SimulationError::EmptySelection);
        }
        let index = self.random.next_range(0, other_doors.len());
        Ok((index, other_doors[index]))
    }

    fn pick_goat_index_excluding(&mut self, excluded: &[usize]) -> Result<usize, SimulationError> {
        let goat_indexes: Vec<usize> = self
            .doors
            .iter()
            .enumerate()
            .filter(|(i, content)| **content == DoorContent::Goat && !excluded.contains(i))
            .map(|(i, _)| i)
            .collect();

        self.random
            .choose(&goat_indexes)
            .copied()
            .ok_or(SimulationError::NoGoatAvailable)
    }
}

impl SimulationEngine<StandardRandomGenerator> {
    pub fn from_door_count(door_count: usize) -> Result<Self, SimulationError> {
        SimulationEngineBuilder::new(door_count).build()
    }
}
