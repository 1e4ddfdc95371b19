mod apportion;
mod cents;
mod classification;
mod classifier;
mod classifiers;
mod config;
mod error;
mod expenses;
mod flow;
mod flows;
pub mod fs;
mod group;
mod interval;
mod report;
mod splits;
mod transaction;
mod transactionlist;

pub use apportion::apportion;
pub use cents::Cents;
pub use classification::Classification;
pub use classifier::Aliaser;
pub use classifier::Classifier;
pub use classifiers::Classifiers;
pub use config::ClassifierSet;
pub use config::CollectionConfig;
pub use config::Config;
pub use config::Threshold;
pub use error::Error;
pub use expenses::ExpenseGroup;
pub use flow::Flow;
pub use flows::Flows;
pub use fs::Fs;
pub use group::Cleanup;
pub use group::FlowGroup;
pub use interval::Interval;
pub use report::Report;
pub use report::ReportBuilder;
pub use splits::assign_joint_splits;
pub use transaction::AccountKind;
pub use transaction::Contribution;
pub use transaction::Transaction;
pub use transactionlist::Transactionlist;
