mod ids;
mod items;
mod loans;
mod results;
mod settings;
mod snapshot;
mod tax_config;
mod year_month;

pub use ids::ItemId;
pub use items::{OneOffExpense, OneOffIncome, RecurringExpense, RecurringIncome};
pub use loans::{Loan, LoanDetails};
pub use results::{MonthOverview, MonthlyProjection, ProjectionSummary};
pub use settings::{SellingHouse, Settings};
pub use snapshot::FinancialSnapshot;
pub use tax_config::IrpfBracket;
pub use year_month::{ParseYearMonthError, YearMonth};
