use std::rc::Rc;

use crate::base;
use crate::base::Cleanup;

/// Source of the flow absorbing money moved outside of the classified
/// transactions.
pub const BANK_ACCOUNT: &str = "Bank Account";

#[derive(Debug, Clone)]
struct Groups {
    income: base::FlowGroup,
    expenses: base::ExpenseGroup,
    savings: base::FlowGroup,
    /// Date given to synthetic transactions.
    latest: Option<time::Date>,
}

/// Collects classified transactions into the income, expenses and savings
/// groups.
#[derive(Debug, Clone)]
pub struct ReportBuilder(Groups);

/// Groups that went through [`Cleanup::cleanup`] and only wait for linking.
#[derive(Debug, Clone)]
pub struct CleanReport(Groups);

/// Balanced report, ready to be written out.
#[derive(Debug, Clone)]
pub struct Report(Groups);

impl ReportBuilder {
    pub fn new(config: &base::Config) -> Self {
        let c = &config.collections;
        Self(Groups {
            income: base::FlowGroup::from_config(&c.income, config.contribution),
            expenses: base::ExpenseGroup::from_config(&c.expenses, config.contribution),
            savings: base::FlowGroup::from_config(&c.savings, config.contribution),
            latest: None,
        })
    }

    pub fn add_transaction(
        &mut self,
        t: Rc<base::Transaction>,
        classification: base::Classification,
    ) -> Result<(), base::Error> {
        let groups = &mut self.0;
        match classification {
            base::Classification::Income => groups.income.insert(t.clone(), None),
            base::Classification::Expense => groups.expenses.insert(t.clone())?,
            base::Classification::Savings => groups.savings.insert(t.clone(), None),
            base::Classification::Ignore => {
                tracing::debug!("ignoring {}", t);
                return Ok(());
            }
            base::Classification::Unknown => {
                tracing::warn!("dropping unclassified transaction {}", t);
                return Ok(());
            }
        }
        groups.latest = groups.latest.max(Some(t.date));
        Ok(())
    }

    /// Validates, consolidates and rounds every group, in report order.
    pub fn cleanup(self) -> CleanReport {
        let mut groups = self.0;
        groups.income.cleanup();
        groups.expenses.cleanup();
        groups.savings.cleanup();
        tracing::info!(
            income = %groups.income.total(),
            expenses = %groups.expenses.total(),
            savings = %groups.savings.total(),
            "cleaned up report"
        );
        CleanReport(groups)
    }
}

impl CleanReport {
    /// Routes whatever income was not spent or saved through the bank
    /// account into savings, then feeds the expenses and savings totals back
    /// into income so that income nets to zero.
    pub fn link(self) -> Report {
        let mut groups = self.0;
        let date = groups.latest.unwrap_or(time::Date::MIN);
        let synthetic =
            |description: &str, amount| Rc::new(base::Transaction::new(date, description, amount));

        let difference =
            groups.income.total() + groups.expenses.total() + groups.savings.total();
        tracing::info!(%difference, "linking report");
        groups
            .savings
            .insert(synthetic(BANK_ACCOUNT, -difference), Some(BANK_ACCOUNT));

        let expenses = groups.expenses.name().to_string();
        groups
            .income
            .insert(synthetic(&expenses, groups.expenses.total()), Some(&expenses));
        let savings = groups.savings.name().to_string();
        groups
            .income
            .insert(synthetic(&savings, groups.savings.total()), Some(&savings));

        Report(groups)
    }
}

impl Report {
    #[cfg(test)]
    pub fn income(&self) -> &base::FlowGroup {
        &self.0.income
    }

    #[cfg(test)]
    pub fn expenses(&self) -> &base::ExpenseGroup {
        &self.0.expenses
    }

    #[cfg(test)]
    pub fn savings(&self) -> &base::FlowGroup {
        &self.0.savings
    }
}

impl std::fmt::Display for Report {
    /// Writes one line per flow, income first, then expenses, then savings.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.income)?;
        write!(f, "{}", self.0.expenses)?;
        write!(f, "{}", self.0.savings)
    }
}
