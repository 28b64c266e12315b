//! Planner `table.optimizer.*` options.

use super::{ConfigOption, OptionType};

/// Options read by the query optimizer.
pub fn options() -> Vec<ConfigOption> {
    vec![
        ConfigOption::new("table.optimizer.agg-phase-strategy", OptionType::Enum)
            .default_value("AUTO")
            .description("Aggregation strategy: AUTO, ONE_PHASE or TWO_PHASE."),
        ConfigOption::new("table.optimizer.reuse-sub-plan-enabled", OptionType::Boolean)
            .default_value("true")
            .description("Reuse identical sub-plans within a job."),
        ConfigOption::new("table.optimizer.reuse-source-enabled", OptionType::Boolean)
            .default_value("true")
            .description("Reuse identical table sources within a job."),
        ConfigOption::new("table.optimizer.source.predicate-pushdown-enabled", OptionType::Boolean)
            .default_value("true")
            .description("Push filters down into sources that support it."),
        ConfigOption::new("table.optimizer.join-reorder-enabled", OptionType::Boolean)
            .default_value("false")
            .description("Reorder joins using table statistics."),
        ConfigOption::new("table.optimizer.join.broadcast-threshold", OptionType::Long)
            .default_value("1048576")
            .description("Broadcast join inputs smaller than this many bytes; -1 disables."),
        ConfigOption::new("table.optimizer.distinct-agg.split.enabled", OptionType::Boolean)
            .default_value("false")
            .description("Split distinct aggregations to spread skewed keys."),
        ConfigOption::new("table.optimizer.distinct-agg.split.bucket-num", OptionType::Integer)
            .default_value("1024")
            .description("Number of buckets used when splitting distinct aggregations."),
        ConfigOption::new("table.optimizer.multiple-input-enabled", OptionType::Boolean)
            .default_value("true")
            .description("Merge operators into multiple-input operators where possible."),
    ]
}
