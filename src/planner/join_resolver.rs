//! Direct join resolution over the catalog's join edges.

use crate::model::{Catalog, JoinEdge};
use crate::planner::plan::Join;
use crate::planner::{PlanError, PlanResult};

/// Resolves requested target tables into join clauses from a base table.
///
/// Only direct `base -> target` edges are followed; no path finding.
pub struct JoinResolver<'a> {
    catalog: &'a Catalog,
    strict: bool,
}

impl<'a> JoinResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            strict: false,
        }
    }

    /// Fail on targets with no edge instead of skipping them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Resolve `targets` in order.
    ///
    /// For each target the first declared `base -> target` edge wins. A
    /// target without an edge contributes no join (or fails with
    /// [`PlanError::MissingJoin`] in strict mode).
    pub fn resolve<S: AsRef<str>>(&self, base: &str, targets: &[S]) -> PlanResult<Vec<Join<'a>>> {
        let mut joins = Vec::with_capacity(targets.len());

        for target in targets {
            let target = target.as_ref();
            match self.catalog.find_edge(base, target) {
                Some(edge) => joins.push(self.build_join(edge)?),
                None if self.strict => {
                    return Err(PlanError::MissingJoin {
                        from: base.to_string(),
                        to: target.to_string(),
                    });
                }
                None => {
                    tracing::debug!(base, target, "no join edge, target contributes no join");
                }
            }
        }

        Ok(joins)
    }

    /// Turn one edge into a join clause.
    pub fn build_join(&self, edge: &JoinEdge) -> PlanResult<Join<'a>> {
        let left = self
            .catalog
            .table(&edge.from)
            .ok_or_else(|| PlanError::UnknownTable(edge.from.clone()))?;
        let right = self
            .catalog
            .table(&edge.to)
            .ok_or_else(|| PlanError::UnknownTable(edge.to.clone()))?;

        let condition = edge
            .keys
            .iter()
            .map(|key| {
                format!(
                    "{}.{} = {}.{}",
                    left.alias, key.left_column, right.alias, key.right_column
                )
            })
            .collect::<Vec<_>>()
            .join(" AND ");

        tracing::debug!(from = %edge.from, to = %edge.to, %condition, "resolved join");

        Ok(Join {
            left,
            right,
            join_type: edge.join_type.clone(),
            condition,
        })
    }
}
