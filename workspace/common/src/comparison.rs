//! Min/max projection over a set of saved scenarios.
//!
//! Used by the comparison view to decide which cells to highlight. Nothing
//! here is persisted; the projection is recomputed from the scenarios passed in.

use serde::Serialize;

use crate::Scenario;

/// Numeric columns of the comparison view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Metric {
    CostPerWorker,
    OverheadCost,
    SelfCostRate,
    NetRate,
    GrossRate,
    NetMinusSelfCostDiff,
    RedistributionAmount,
}

impl Metric {
    pub const ALL: [Metric; 7] = [
        Metric::CostPerWorker,
        Metric::OverheadCost,
        Metric::SelfCostRate,
        Metric::NetRate,
        Metric::GrossRate,
        Metric::NetMinusSelfCostDiff,
        Metric::RedistributionAmount,
    ];

    /// Reads this column from a scenario.
    pub fn value(self, scenario: &Scenario) -> f64 {
        match self {
            Metric::CostPerWorker => scenario.input.cost_per_worker,
            Metric::OverheadCost => scenario.input.overhead_cost,
            Metric::SelfCostRate => scenario.result.self_cost_rate,
            Metric::NetRate => scenario.result.net_rate,
            Metric::GrossRate => scenario.result.gross_rate,
            Metric::NetMinusSelfCostDiff => scenario.result.net_minus_self_cost_diff,
            Metric::RedistributionAmount => scenario.result.redistribution_amount,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::CostPerWorker => "Cost per worker",
            Metric::OverheadCost => "Overhead",
            Metric::SelfCostRate => "Self-cost rate (/h)",
            Metric::NetRate => "Net rate (/h)",
            Metric::GrossRate => "Gross rate (/h)",
            Metric::NetMinusSelfCostDiff => "Net - self-cost (/h)",
            Metric::RedistributionAmount => "Redistribution (/h)",
        }
    }
}

/// How a single cell should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Highlight {
    None,
    Max,
    Min,
}

/// Smallest and largest value of one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColumnExtremes {
    pub metric: Metric,
    pub min: f64,
    pub max: f64,
}

impl ColumnExtremes {
    /// A column whose values are all equal carries no highlighting.
    pub fn is_uniform(&self) -> bool {
        self.min == self.max
    }
}

/// Extremes for every metric over the compared scenarios.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    scenario_count: usize,
    columns: Vec<ColumnExtremes>,
}

impl Comparison {
    pub fn of(scenarios: &[Scenario]) -> Self {
        let columns = Metric::ALL
            .iter()
            .filter_map(|&metric| {
                let mut values = scenarios.iter().map(|s| metric.value(s));
                let first = values.next()?;
                let (min, max) = values.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
                Some(ColumnExtremes { metric, min, max })
            })
            .collect();

        Self {
            scenario_count: scenarios.len(),
            columns,
        }
    }

    pub fn scenario_count(&self) -> usize {
        self.scenario_count
    }

    pub fn extremes(&self, metric: Metric) -> Option<&ColumnExtremes> {
        self.columns.iter().find(|c| c.metric == metric)
    }

    /// Highlighting for `value` in column `metric`. Only applies when at least
    /// two scenarios are compared and the column is not uniform.
    pub fn highlight(&self, metric: Metric, value: f64) -> Highlight {
        if self.scenario_count < 2 {
            return Highlight::None;
        }
        match self.extremes(metric) {
            Some(column) if !column.is_uniform() => {
                if value == column.max {
                    Highlight::Max
                } else if value == column.min {
                    Highlight::Min
                } else {
                    Highlight::None
                }
            }
            _ => Highlight::None,
        }
    }
}
