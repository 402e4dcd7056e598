//! The resolution operator.
//!
//! # Overview
//!
//! Given clauses *c₁* and *c₂* and a literal *l* of *c₁* whose negation *-l* is in *c₂*, the resolvent of *c₁* and *c₂* on *l* is the clause containing every literal of *c₁* other than *l*, and every literal of *c₂* other than *-l*.
//!
//! ```none
//!     c₁ ∨ l    c₂ ∨ -l
//!     ─────────────────
//!          c₁ ∨ c₂
//! ```
//!
//! [resolve] returns the resolvent for every complementary pair of literals between two clauses, each in canonical form.
//! As the choice of which clause is given first only changes the order in which pairs are examined, the resolvents returned are the same set regardless of the order of the clauses.
//!
//! The empty clause is returned exactly when the two clauses are complementary unit clauses, e.g. `[p]` and `[~p]`.
//!
//! ```rust
//! # use otter_refute::procedures::resolve::resolve;
//! # use otter_refute::structures::clause::CClause;
//! # use otter_refute::structures::literal::Literal;
//! let p = Literal::try_from_token("p").unwrap();
//!
//! assert_eq!(resolve(&[p.clone()], &[p.negate()]), vec![CClause::default()]);
//! assert!(resolve(&[p.clone()], &[p.clone()]).is_empty());
//! ```
//!
//! # Duplicates
//!
//! If two complementary pairs give the same resolvent, the resolvent is returned once.
//! Though, nothing is done to check whether a resolvent is present elsewhere --- that is for [saturation](crate::procedures::saturate).

use crate::{
    misc::log::targets::{self},
    structures::{
        clause::{CClause, Clause},
        literal::Literal,
    },
};

/// Every resolvent of `ci` and `cj`, in the order the complementary pairs are found.
pub fn resolve(ci: &[Literal], cj: &[Literal]) -> Vec<CClause> {
    let mut resolvents: Vec<CClause> = Vec::default();

    for di in ci {
        for dj in cj.iter().filter(|dj| di.is_complement_of(dj)) {
            let resolvent = ci
                .iter()
                .filter(|literal| *literal != di)
                .chain(cj.iter().filter(|literal| *literal != dj))
                .cloned()
                .collect::<CClause>()
                .canonical();

            if !resolvents.contains(&resolvent) {
                log::trace!(target: targets::RESOLUTION, "Resolved on {di}: {}", resolvent.as_string());
                resolvents.push(resolvent);
            }
        }
    }

    resolvents
}
