//! Cash-flow projection library
//!
//! This crate projects a household or freelancer's bank balance forward month
//! by month from a `FinancialSnapshot`. It supports:
//! - Recurring income and expenses with inclusive month activity windows
//! - Amortizing loans with fixed payments
//! - One-off income and expenses
//! - A house-sale scenario that cancels selected loans
//! - Spanish freelance taxes: IVA, IRPF withholding, quarterly advances and
//!   the annual "Renta" settlement over a progressive bracket table
//!
//! Every entry point is a pure function of its inputs. The current date is
//! always passed in explicitly.
//!
//! # Builder DSL
//!
//! ```ignore
//! use cashplan_core::config::{SnapshotBuilder, IncomeBuilder, ExpenseBuilder};
//! use cashplan_core::projection::project;
//! use jiff::civil::date;
//!
//! let snapshot = SnapshotBuilder::new()
//!     .starting_balance(1_000.0)
//!     .freelance(false)
//!     .income(IncomeBuilder::new("Salary", 2_000.0))
//!     .expense(ExpenseBuilder::new("Rent", 1_500.0))
//!     .build();
//!
//! let months = project(&snapshot, date(2025, 1, 10), date(2025, 12, 31));
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod activity;
pub mod date_math;
pub mod house_sale;
pub mod income;
pub mod loans;
pub mod projection;
pub mod taxes;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{ExpenseBuilder, IncomeBuilder, LoanBuilder, SnapshotBuilder};
pub use loans::{amortization_state, loan_details};
pub use projection::{month_overview, monthly_result, project, project_with_summary};
pub use taxes::{calculate_progressive_tax, settle_year};
