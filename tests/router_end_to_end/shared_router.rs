//! One router shared by many threads.

use std::sync::Arc;
use std::thread;

use crate::common::*;

#[test]
fn concurrent_scripts_on_one_router() {
    let router = Arc::new(Router::new());
    let env = Arc::new(MemoryEnvironment::new());

    let handles: Vec<_> = (0..6)
        .map(|n| {
            let router = Arc::clone(&router);
            let env = Arc::clone(&env);
            thread::spawn(move || {
                let sink = CaptureSink::new();
                let sql = format!(
                    "CREATE DATABASE db{n}; CREATE TABLE db{n}.events (id INT); SHOW CURRENT CATALOG"
                );
                router.execute_sql(&sql, env.as_ref(), &sink).unwrap();
                sink.lines()
            })
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), vec!["current catalog: default_catalog"]);
    }
    assert_eq!(env.list_databases().unwrap().len(), 7);
    assert_eq!(router.mutation_lock().acquisitions(), 12);
    assert!(!router.mutation_lock().is_locked());
}

#[test]
fn one_router_many_environments() {
    let router = Arc::new(Router::new());

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let router = Arc::clone(&router);
            thread::spawn(move || {
                let env = MemoryEnvironment::new();
                let sink = CaptureSink::new();
                let sql = format!("CREATE TABLE only_{n} (id INT); SHOW TABLES");
                router.execute_sql(&sql, &env, &sink).unwrap();
                (n, sink.lines())
            })
        })
        .collect();

    for h in handles {
        let (n, lines) = h.join().unwrap();
        assert_eq!(lines, vec![format!("tables: [only_{n}]")]);
    }
}
