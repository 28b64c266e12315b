//! Output sinks supplied by the caller.

use parking_lot::Mutex;

use crate::common::*;

#[test]
fn closure_sink_receives_output() {
    let t = TestRouter::new();
    let seen = Mutex::new(Vec::new());
    let sink = |text: &str| seen.lock().push(text.to_uppercase());

    t.router
        .execute_sql("SHOW CURRENT DATABASE; SHOW MODULES", t.env.as_ref(), &sink)
        .unwrap();

    assert_eq!(
        *seen.lock(),
        vec!["CURRENT DATABASE: DEFAULT_DATABASE", "MODULES: [CORE]"]
    );
}

#[test]
fn mutating_and_config_commands_emit_nothing() {
    let t = TestRouter::new();
    t.run(
        "CREATE DATABASE quiet; USE quiet; CREATE TABLE t (x INT);
         SET pipeline.name = silent; RESET pipeline.name; RESET ALL",
    );
    assert!(t.output().is_empty());
}

#[test]
fn one_emission_per_introspective_command() {
    let t = TestRouter::new();
    t.run(
        "CREATE TABLE a (x INT, y INT);
         SHOW CATALOGS; SHOW DATABASES; SHOW TABLES; SHOW FUNCTIONS;
         SHOW MODULES; DESC a; EXPLAIN SELECT x FROM a",
    );
    assert_eq!(t.output().len(), 7);
}
