//! A small simulator for the Monty Hall problem.
//!
//! A [`SimulationEngine`](engine::SimulationEngine) hides one car behind a random door and
//! plays three strategies against that fixed layout, counting how often each one ends on the
//! car. Counts and rates live in a [`ResultAggregator`](aggregator::ResultAggregator).
//!
//! # Example
//!
//! ```rust
//! use monty_hall_sim::engine::SimulationEngine;
//! use monty_hall_sim::random::SeededRandomGenerator;
//! use monty_hall_sim::strategy::Strategy;
//!
//! // Classic game with three doors and a reproducible generator
//! let mut engine = SimulationEngine::builder(3)
//!     .with_random_generator(SeededRandomGenerator::new(42))
//!     .build()
//!     .unwrap();
//!
//! // Play every strategy 1000 times
//! engine.run_trials(1000).unwrap();
//!
//! let tally = engine.results().tally(Strategy::SwitchOther);
//! assert_eq!(tally.total(), 1000);
//! println!("{}", engine.results().summary().unwrap());
//! ```

/// Contains `ResultAggregator`, the per-strategy outcome counters.
pub mod aggregator;
/// Contains the `DoorContent` enum.
pub mod door;
/// The core module of the library, containing the `SimulationEngine` implementation.
pub mod engine;
/// Contains the `SimulationError` enum.
pub mod error;
/// Logging setup for binaries.
pub mod logging;
/// Contains traits and implementations for random number generation.
pub mod random;
/// Contains the `Strategy` enum and its report texts.
pub mod strategy;
