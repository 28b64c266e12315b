//! Router configuration loaded from `tablegate.toml`.

use crate::common::*;

#[test]
fn config_file_changes_param_key() {
    let (_dir, path) = config_dir("sql_param_key = \"query\"\n");
    let config = RouterConfig::from_file(&path).unwrap();
    let t = TestRouter::with_config(config);

    let params = Params::new().with("query", "SHOW MODULES");
    t.router
        .execute(None, &params, t.env.as_ref(), &t.sink)
        .unwrap();
    assert_eq!(t.output(), vec!["modules: [core]"]);
}

#[test]
fn config_file_changes_unnamed_prefix() {
    let (_dir, path) = config_dir("unnamed_table_prefix = \"scratch_\"\n");
    let t = TestRouter::with_config(RouterConfig::from_file(&path).unwrap());

    t.run("CREATE TABLE scratch_1 (x INT); CREATE TABLE real_one (x INT); SHOW TABLES");
    assert_eq!(t.output(), vec!["tables: [real_one]"]);
}

#[test]
fn invalid_config_file_is_validation_error() {
    let (_dir, path) = config_dir("sql_param_key = 42\n");
    let err = RouterConfig::from_file(&path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn default_file_is_written_once() {
    let (dir, _) = config_dir("");
    let path = dir.path().join("fresh.toml");
    RouterConfig::write_default_if_missing(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, RouterConfig::default_toml());
    assert_eq!(RouterConfig::from_file(&path).unwrap(), RouterConfig::default());
}
