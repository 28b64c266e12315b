//! Runtime `table.exec.*` options.

use super::{ConfigOption, OptionType};

/// Options read by the execution runtime.
pub fn options() -> Vec<ConfigOption> {
    vec![
        ConfigOption::new("table.exec.state.ttl", OptionType::Duration)
            .default_value("0 ms")
            .description("Minimum time idle state is retained; 0 keeps state forever."),
        ConfigOption::new("table.exec.source.idle-timeout", OptionType::Duration)
            .default_value("0 ms")
            .description("Mark a source idle after this long without records."),
        ConfigOption::new("table.exec.source.cdc-events-duplicate", OptionType::Boolean)
            .default_value("false")
            .description("Deduplicate change events from at-least-once CDC sources."),
        ConfigOption::new("table.exec.sink.not-null-enforcer", OptionType::Enum)
            .default_value("ERROR")
            .description("What to do with NULL written to a NOT NULL column: ERROR or DROP."),
        ConfigOption::new("table.exec.sink.upsert-materialize", OptionType::Enum)
            .default_value("AUTO")
            .description("Materialize upsert changes before the sink: NONE, AUTO or FORCE."),
        ConfigOption::new("table.exec.resource.default-parallelism", OptionType::Integer)
            .default_value("-1")
            .description("Default parallelism of operators; -1 defers to the pipeline."),
        ConfigOption::new("table.exec.mini-batch.enabled", OptionType::Boolean)
            .default_value("false")
            .description("Buffer input records to reduce state access."),
        ConfigOption::new("table.exec.mini-batch.allow-latency", OptionType::Duration)
            .default_value("0 ms")
            .description("Maximum latency a mini-batch may add."),
        ConfigOption::new("table.exec.mini-batch.size", OptionType::Long)
            .default_value("-1")
            .description("Maximum number of records buffered per mini-batch."),
        ConfigOption::new("table.exec.async-lookup.buffer-capacity", OptionType::Integer)
            .default_value("100")
            .description("Maximum in-flight async lookup requests."),
        ConfigOption::new("table.exec.async-lookup.timeout", OptionType::Duration)
            .default_value("3 min")
            .description("Timeout for a single async lookup request."),
        ConfigOption::new("table.exec.sort.default-limit", OptionType::Integer)
            .default_value("-1")
            .description("Implicit limit applied to ORDER BY without LIMIT; -1 disables."),
        ConfigOption::new("table.exec.spill-compression.enabled", OptionType::Boolean)
            .default_value("true")
            .description("Compress spilled data."),
        ConfigOption::new("table.exec.spill-compression.block-size", OptionType::MemorySize)
            .default_value("64 kb")
            .description("Block size used when compressing spilled data."),
        ConfigOption::new("table.exec.disabled-operators", OptionType::String)
            .description("Comma-separated operator names the planner must not use."),
        ConfigOption::new("table.exec.legacy-cast-behaviour", OptionType::Enum)
            .default_value("DISABLED")
            .description("Restore pre-1.15 CAST semantics: ENABLED or DISABLED."),
    ]
}
