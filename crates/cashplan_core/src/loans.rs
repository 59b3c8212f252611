//! Loan amortization
//!
//! Balances are simulated month by month from the loan's start date: each
//! month accrues interest at the nominal annual rate / 12, then subtracts the
//! fixed payment, clamping at zero. The payment is never shrunk in the final
//! month, so the last installment may exceed what is actually owed.
//!
//! `amortization_state` recomputes from origin on every call (O(months since
//! start)). The projection engine only needs the payment, which is O(1) via
//! `payment_due`; `AmortizationSchedule` walks consecutive months carrying the
//! balance forward and yields the same figures as the from-origin simulation.

use jiff::civil::Date;

use crate::date_math::months_between;
use crate::model::{Loan, LoanDetails, YearMonth};

/// Balance and payment of a loan at a given date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationState {
    pub balance: f64,
    pub effective_monthly_payment: f64,
}

/// Where a loan stands relative to its term on a given date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoanPhase {
    NotStarted,
    /// Running, with this many whole months elapsed since start
    Active(i32),
    Matured,
}

fn phase(loan: &Loan, as_of: Date) -> LoanPhase {
    if as_of < loan.start_date {
        LoanPhase::NotStarted
    } else if as_of >= loan.maturity_date {
        LoanPhase::Matured
    } else {
        LoanPhase::Active(months_between(loan.start_date, as_of))
    }
}

/// One month of interest accrual followed by the fixed payment.
#[inline]
fn amortize_month(balance: f64, monthly_rate: f64, payment: f64) -> f64 {
    let mut balance = balance;
    balance += balance * monthly_rate;
    balance -= payment;
    if balance < 0.0 { 0.0 } else { balance }
}

/// Payment owed for `loan` on `as_of`: the fixed payment while the loan runs, else 0.
pub fn payment_due(loan: &Loan, as_of: Date) -> f64 {
    match phase(loan, as_of) {
        LoanPhase::Active(_) => loan.monthly_payment,
        LoanPhase::NotStarted | LoanPhase::Matured => 0.0,
    }
}

/// Outstanding balance and effective payment of `loan` on `as_of`.
pub fn amortization_state(loan: &Loan, as_of: Date) -> AmortizationState {
    match phase(loan, as_of) {
        LoanPhase::NotStarted => AmortizationState {
            balance: loan.outstanding_balance,
            effective_monthly_payment: 0.0,
        },
        LoanPhase::Matured => AmortizationState {
            balance: 0.0,
            effective_monthly_payment: 0.0,
        },
        LoanPhase::Active(elapsed) => {
            let rate = loan.monthly_rate();
            let balance = (0..elapsed).fold(loan.outstanding_balance, |balance, _| {
                amortize_month(balance, rate, loan.monthly_payment)
            });
            AmortizationState {
                balance,
                effective_monthly_payment: loan.monthly_payment,
            }
        }
    }
}

/// Balance, payment and a simple remaining-payments estimate on `as_of`.
pub fn loan_details(loan: &Loan, as_of: Date) -> LoanDetails {
    let state = amortization_state(loan, as_of);
    let months_remaining = months_between(as_of, loan.maturity_date).max(0);

    LoanDetails {
        current_balance: state.balance,
        monthly_payment: state.effective_monthly_payment,
        months_remaining,
        total_remaining: state.effective_monthly_payment * months_remaining as f64,
    }
}

/// One row of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleEntry {
    pub month: YearMonth,
    pub balance: f64,
    pub payment: f64,
}

/// Month-by-month schedule of a loan, evaluated on the first of each month.
///
/// State is carried forward between months, so walking N months costs
/// O(months before the first month + N) instead of O(N²). Iteration stops at
/// the first month on or after maturity.
#[derive(Debug, Clone)]
pub struct AmortizationSchedule<'a> {
    loan: &'a Loan,
    next: Option<YearMonth>,
    balance: f64,
    /// Number of monthly steps already applied to `balance`
    applied: i32,
}

impl<'a> AmortizationSchedule<'a> {
    /// Schedule starting at the month containing `from`.
    pub fn new(loan: &'a Loan, from: Date) -> Self {
        Self {
            loan,
            next: Some(YearMonth::from_date(from)),
            balance: loan.outstanding_balance,
            applied: 0,
        }
    }

    /// Schedule covering the whole loan term.
    pub fn full_term(loan: &'a Loan) -> Self {
        Self::new(loan, loan.start_date)
    }
}

impl Iterator for AmortizationSchedule<'_> {
    type Item = ScheduleEntry;

    fn next(&mut self) -> Option<ScheduleEntry> {
        let month = self.next?;
        let as_of = month.first_day();

        let entry = match phase(self.loan, as_of) {
            LoanPhase::Matured => {
                self.next = None;
                return None;
            }
            LoanPhase::NotStarted => ScheduleEntry {
                month,
                balance: self.loan.outstanding_balance,
                payment: 0.0,
            },
            LoanPhase::Active(elapsed) => {
                let rate = self.loan.monthly_rate();
                while self.applied < elapsed {
                    self.balance = amortize_month(self.balance, rate, self.loan.monthly_payment);
                    self.applied += 1;
                }
                ScheduleEntry {
                    month,
                    balance: self.balance,
                    payment: self.loan.monthly_payment,
                }
            }
        };

        self.next = month.next();
        Some(entry)
    }
}
