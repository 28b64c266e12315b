//! General `table.*` options.

use super::{ConfigOption, OptionType, SQL_DIALECT_KEY};

/// Options owned by the table environment itself.
pub fn options() -> Vec<ConfigOption> {
    vec![
        ConfigOption::new(SQL_DIALECT_KEY, OptionType::String)
            .default_value("default")
            .description("The SQL dialect used to parse statements: 'default' or 'hive'."),
        ConfigOption::new("table.dml-sync", OptionType::Boolean)
            .default_value("false")
            .description("Block until INSERT statements have finished executing."),
        ConfigOption::new("table.dynamic-table-options.enabled", OptionType::Boolean)
            .default_value("true")
            .description("Allow table options to be overridden with query hints."),
        ConfigOption::new("table.local-time-zone", OptionType::String)
            .default_value("default")
            .description("Session time zone used for TIMESTAMP WITH LOCAL TIME ZONE values."),
        ConfigOption::new("table.generated-code.max-length", OptionType::Integer)
            .default_value("4000")
            .description("Split generated code into methods no longer than this."),
        ConfigOption::new("table.builtin-catalog-name", OptionType::String)
            .default_value("default_catalog")
            .description("Name of the catalog created at startup."),
        ConfigOption::new("table.builtin-database-name", OptionType::String)
            .default_value("default_database")
            .description("Name of the database created in the built-in catalog."),
        ConfigOption::new("table.display.max-column-width", OptionType::Integer)
            .default_value("30")
            .description("Truncate displayed column values beyond this width."),
        ConfigOption::new("table.resources.download-dir", OptionType::String)
            .description("Directory for downloaded function resources."),
    ]
}
