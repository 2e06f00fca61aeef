//! Build query plans from semantics requests.

use crate::model::Catalog;
use crate::planner::join_resolver::JoinResolver;
use crate::planner::plan::QueryPlan;
use crate::planner::{PlanError, PlanOptions, PlanResult};
use crate::semantics::SemanticsRequest;

pub struct QueryPlanner<'a> {
    catalog: &'a Catalog,
    options: PlanOptions,
}

impl<'a> QueryPlanner<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_options(catalog, PlanOptions::default())
    }

    pub fn with_options(catalog: &'a Catalog, options: PlanOptions) -> Self {
        Self { catalog, options }
    }

    /// Build a plan for `request`.
    ///
    /// Every requested table must exist in the catalog. Outside strict mode,
    /// a dimension without a join edge or without a string column is
    /// skipped for that part of the plan rather than rejected.
    pub fn build(&self, request: &SemanticsRequest) -> PlanResult<QueryPlan<'a>> {
        let base_table = self
            .catalog
            .table(&request.base_entity)
            .ok_or_else(|| PlanError::UnknownTable(request.base_entity.clone()))?;

        let dimension_tables = request
            .dimensions
            .iter()
            .map(|name| {
                self.catalog
                    .table(name)
                    .ok_or_else(|| PlanError::UnknownTable(name.clone()))
            })
            .collect::<PlanResult<Vec<_>>>()?;

        let mut plan = QueryPlan::new(base_table);

        plan.joins = JoinResolver::new(self.catalog)
            .strict(self.options.strict)
            .resolve(&request.base_entity, request.dimensions.as_slice())?;

        for table in dimension_tables {
            match table.first_string_column() {
                Some(column) => {
                    let qualified = table.qualify(&column.name);
                    plan.select.push(qualified.clone());
                    plan.group_by.push(qualified);
                }
                None if self.options.strict => {
                    return Err(PlanError::NoStringColumn {
                        table: table.name.clone(),
                    });
                }
                None => {
                    tracing::debug!(table = %table.name, "dimension has no string column, skipped");
                }
            }
        }

        for measure in &request.measures {
            if let Some(previous) = plan.aggregates.insert(&measure.column, &measure.agg) {
                tracing::debug!(
                    column = %measure.column,
                    %previous,
                    agg = %measure.agg,
                    "measure column repeated, later aggregate wins"
                );
            }
        }

        plan.filters = request.filters.clone();

        tracing::debug!(
            base = %base_table.name,
            joins = plan.joins.len(),
            select = plan.select.len(),
            aggregates = plan.aggregates.len(),
            filters = plan.filters.len(),
            "built query plan"
        );

        Ok(plan)
    }
}
