pub mod calculator;
pub mod calendar;
pub mod compounding;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod rates;
pub mod report;
pub mod tax;
pub mod types;

// re-export key types
pub use calculator::RentabilityCalculator;
pub use calendar::{DaySpan, HolidayCalendar};
pub use compounding::{compound, effective_period_rate, CompoundResult, BUSINESS_DAYS_PER_YEAR};
pub use config::{CalculatorConfig, TaxAssessment};
pub use decimal::{Money, Rate};
pub use errors::{CalculationError, Result};
pub use rates::resolve_annual_rate;
pub use report::{DisplayView, InvestmentView};
pub use tax::{assess, income_tax_rate, iof_yield_fraction, TaxBreakdown};
pub use types::{CalculationResult, Investment, InvestmentId, Modality};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
