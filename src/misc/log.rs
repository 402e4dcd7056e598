/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [resolution operator](crate::procedures::resolve)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [saturation](crate::procedures::saturate)
    pub const SATURATION: &str = "saturation";

    /// Logs related to [building](crate::builder) a context
    pub const BUILDER: &str = "builder";

    /// Logs related to [configuration](crate::config)
    pub const CONFIG: &str = "config";
}
