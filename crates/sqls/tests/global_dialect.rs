//! Process-wide dialect switching.
//!
//! Kept as a single test: the dialect is global to the test binary, so the
//! steps must run in sequence.

use sqls::prelude::*;
use sqls::{DialectConfig, configure, current_dialect, set_dialect};

#[test]
fn switching_dialects_affects_only_new_builders() {
    // Default is `@`.
    assert_eq!(current_dialect().placeholder(), "@");
    let q = insert_many_into("users")
        .columns(&["name", "age"])
        .add_row(values!["John", 30])
        .add_row(values!["Jane", 25])
        .build()
        .unwrap();
    assert_eq!(q.sql, "INSERT INTO users(name,age) VALUES (@1,@2),(@3,@4)");
    assert_eq!(q.args, values!["John", 30, "Jane", 25]);

    // A builder created before the switch keeps its snapshot.
    let mut before = select_from("users");
    before.and_eq("id", 1);

    set_dialect(Dialect::postgres());
    assert_eq!(current_dialect().placeholder(), "$");

    let q = select_from("users").and_eq("active", false).build().unwrap();
    assert_eq!(q.sql, "SELECT * FROM users WHERE active=$1");
    assert_eq!(q.args, vec![Value::Bool(false)]);

    let q = update_table("users")
        .set("active", true)
        .and_eq("id", "123")
        .build()
        .unwrap();
    assert_eq!(q.sql, "UPDATE users SET active=$1 WHERE id=$2");
    assert_eq!(q.args, values![true, "123"]);

    before.and_eq("name", "x");
    assert_eq!(before.to_sql(), "SELECT * FROM users WHERE id=@1 AND name=@2");

    // Configuration path, including rejection of a bad prefix.
    let err = configure(&DialectConfig::new("")).unwrap_err();
    assert!(err.is_config());
    assert_eq!(current_dialect().placeholder(), "$");

    let config: DialectConfig = serde_json::from_str(r#"{"placeholder_prefix":":p"}"#).unwrap();
    configure(&config).unwrap();
    let q = delete_from("users").and_in("id", [1, 2, 3]).build().unwrap();
    assert_eq!(q.sql, "DELETE FROM users WHERE id IN (:p1,:p2,:p3)");

    let q = insert_into("users").set("name", "x").build().unwrap();
    assert_eq!(q.sql, "INSERT INTO users (name) VALUES (:p1)");

    set_dialect(Dialect::default());
}
