/*!
Configuration of a context.

All configuration for a context is contained within [Config], as a collection of [options](ConfigOption).

# Pairing

By default each round resolves every pair of clauses in the knowledge base, including pairs resolved in an earlier round.
This repeats work, but keeps each round a function of the knowledge base alone.

With [Pairing::Fresh] a round only resolves pairs where at least one clause was added since the previous round (or, for the first round, every pair).
As any pair of older clauses was resolved during some earlier round, and every novel resolvent of that round was added, the decision is unchanged.
Only the time taken, and the order of the trace, differ.
*/

mod config_option;
pub use config_option::ConfigOption;

mod pairing;
pub use pairing::Pairing;

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which pairs of clauses to resolve during a round.
    pub pairing: ConfigOption<Pairing>,

    /// The time limit for a solve, with zero for no limit.
    pub time_limit: ConfigOption<Duration>,
}

impl Config {
    /// The time limit, if some limit is set.
    pub fn time_limit(&self) -> Option<Duration> {
        match self.time_limit.value.is_zero() {
            true => None,
            false => Some(self.time_limit.value),
        }
    }
}

impl Default for Config {
    /// The default configuration resolves every pair each round, without a time limit, and so always reaches a decision.
    fn default() -> Self {
        Config {
            pairing: ConfigOption {
                name: "pairing",
                min: Pairing::MIN,
                max: Pairing::MAX,
                value: Pairing::Exhaustive,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },
        }
    }
}
