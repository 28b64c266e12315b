//! Job-level `pipeline.*` options.

use super::{ConfigOption, OptionType};

/// Options that apply to the submitted job as a whole.
pub fn options() -> Vec<ConfigOption> {
    vec![
        ConfigOption::new("pipeline.name", OptionType::String)
            .description("Name of the job shown in logs and the web UI."),
        ConfigOption::new("pipeline.auto-watermark-interval", OptionType::Duration)
            .default_value("200 ms")
            .description("Interval at which periodic watermarks are emitted."),
        ConfigOption::new("pipeline.object-reuse", OptionType::Boolean)
            .default_value("false")
            .description("Reuse record objects between operators."),
        ConfigOption::new("pipeline.max-parallelism", OptionType::Integer)
            .default_value("-1")
            .description("Upper bound for dynamic scaling; -1 derives it from parallelism."),
        ConfigOption::new("pipeline.operator-chaining", OptionType::Boolean)
            .default_value("true")
            .description("Chain operators into the same task where possible."),
        ConfigOption::new("pipeline.time-characteristic", OptionType::Enum)
            .default_value("ProcessingTime")
            .description("Time characteristic of DataStream sources."),
    ]
}
