//! Builder DSL for snapshots
//!
//! Snapshots normally come from the application's data file. For tests,
//! benchmarks and quick experiments the fluent builder is more convenient:
//!
//! ```ignore
//! use cashplan_core::config::{SnapshotBuilder, IncomeBuilder, ExpenseBuilder, LoanBuilder};
//! use jiff::civil::date;
//!
//! let snapshot = SnapshotBuilder::new()
//!     .starting_balance(5_000.0)
//!     .expense_deviation(5.0)
//!     .bracket(0.0, Some(12_450.0), 19.0)
//!     .bracket(12_450.0, None, 24.0)
//!     .income(IncomeBuilder::new("Consulting", 3_000.0).iva(21.0).irpf(15.0))
//!     .expense(ExpenseBuilder::new("Coworking", 250.0).professional())
//!     .loan(LoanBuilder::new("Mortgage", 150_000.0)
//!         .payment(750.0)
//!         .rate(2.9)
//!         .term(date(2020, 6, 1), date(2050, 6, 1)))
//!     .build();
//! ```

pub mod builder;
pub mod item_builder;

pub use builder::SnapshotBuilder;
pub use item_builder::{ExpenseBuilder, IncomeBuilder, LoanBuilder};
