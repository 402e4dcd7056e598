/*!
Macros for sending dispatches from a context.

Each macro checks for a dispatcher before building a dispatch, as building a dispatch often requires cloning a clause.
*/

/// Sends a clause database delta, cloning the clause.
macro_rules! send_clause_db_delta {
    ($self:ident, $variant:ident, $key:expr, $clause:expr) => {
        if let Some(dispatcher) = &mut $self.dispatcher {
            let delta = delta::ClauseDB::$variant($key, $clause.clone());
            dispatcher(Dispatch::Delta(Delta::ClauseDB(delta)));
        }
    };
}
pub(crate) use send_clause_db_delta;

/// Sends a saturation delta.
macro_rules! send_saturation_delta {
    ($self:ident, $delta:expr) => {
        if let Some(dispatcher) = &mut $self.dispatcher {
            dispatcher(Dispatch::Delta(Delta::Saturation($delta)));
        }
    };
}
pub(crate) use send_saturation_delta;

/// Sends each counter as a stat.
macro_rules! send_stats {
    ($self:ident) => {
        if let Some(dispatcher) = &mut $self.dispatcher {
            dispatcher(Dispatch::Stat(Stat::Rounds($self.counters.rounds)));
            dispatcher(Dispatch::Stat(Stat::Pairs($self.counters.pairs)));
            dispatcher(Dispatch::Stat(Stat::Resolvents($self.counters.resolvents)));
            dispatcher(Dispatch::Stat(Stat::Additions($self.counters.additions)));
            dispatcher(Dispatch::Stat(Stat::Time($self.counters.time)));
        }
    };
}
pub(crate) use send_stats;

/// Sends the report of a solve, followed by a finish.
macro_rules! send_finish {
    ($self:ident, $report:expr) => {
        if let Some(dispatcher) = &mut $self.dispatcher {
            dispatcher(Dispatch::Report(Report::Solve($report)));
            dispatcher(Dispatch::Report(Report::Finish));
        }
    };
}
pub(crate) use send_finish;
