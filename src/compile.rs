//! End-to-end compilation from a semantics request to SQL.
//!
//! ```text
//! Catalog + SemanticsRequest → QueryPlanner → QueryPlan → SqlRenderer → SQL
//! ```
//!
//! # Example
//!
//! ```ignore
//! use semplan::compile::{compile, CompileOptions};
//! use semplan::metadata::{MetadataProvider, YamlMetadataProvider};
//! use semplan::semantics::SemanticsRequest;
//!
//! let catalog = YamlMetadataProvider::new("./metadata").load_catalog()?;
//! let request = SemanticsRequest::new("employee_fact")
//!     .dimension("department_dim")
//!     .measure("e.employee_id", "count");
//!
//! let output = compile(&catalog, &request, &CompileOptions::default())?;
//! println!("{}", output.sql);
//! ```

use crate::metadata::{CatalogLoadError, MetadataProvider};
use crate::model::Catalog;
use crate::planner::{PlanError, PlanOptions, QueryPlan, QueryPlanner};
use crate::semantics::SemanticsRequest;
use crate::sql::{validate_sql, SqlRenderer};

// ============================================================================
// Error Types
// ============================================================================

/// Errors that can occur during compilation.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Catalog load error: {0}")]
    Catalog(#[from] CatalogLoadError),

    #[error("Planning error: {0}")]
    Plan(#[from] PlanError),

    #[error("{0}")]
    InvalidSql(String),
}

pub type CompileResult<T> = Result<T, CompileError>;

// ============================================================================
// Options
// ============================================================================

/// Options for compilation.
#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    /// Fail on dimensions lacking a join edge or a string column.
    pub strict: bool,

    /// Parse the rendered SQL and fail if it is not syntactically valid.
    pub validate_sql: bool,
}

impl CompileOptions {
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_validate_sql(mut self, validate_sql: bool) -> Self {
        self.validate_sql = validate_sql;
        self
    }

    fn plan_options(&self) -> PlanOptions {
        PlanOptions {
            strict: self.strict,
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Result of compiling a request.
#[derive(Debug, Clone)]
pub struct CompileOutput<'a> {
    /// The generated SQL string.
    pub sql: String,

    /// The plan the SQL was rendered from.
    pub plan: QueryPlan<'a>,
}

// ============================================================================
// Compilation Functions
// ============================================================================

/// Compile a request against a loaded catalog snapshot.
pub fn compile<'a>(
    catalog: &'a Catalog,
    request: &SemanticsRequest,
    options: &CompileOptions,
) -> CompileResult<CompileOutput<'a>> {
    let plan = QueryPlanner::with_options(catalog, options.plan_options()).build(request)?;
    let sql = SqlRenderer::new().render(&plan);

    if options.validate_sql {
        validate_sql(&sql).map_err(CompileError::InvalidSql)?;
    }

    tracing::debug!(base = %request.base_entity, %sql, "compiled request");

    Ok(CompileOutput { sql, plan })
}

/// Load a catalog from `provider` and compile a single request to SQL text.
pub fn compile_with_provider(
    provider: &dyn MetadataProvider,
    request: &SemanticsRequest,
    options: &CompileOptions,
) -> CompileResult<String> {
    let catalog = provider.load_catalog()?;
    let output = compile(&catalog, request, options)?;
    Ok(output.sql)
}
