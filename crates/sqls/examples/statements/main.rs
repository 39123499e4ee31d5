//! Prints each statement shape with its bound arguments.
//!
//! Run with:
//!   cargo run --example statements -p sqls
//!
//! Optional:
//!   SQLS_PLACEHOLDER='$' cargo run --example statements -p sqls

use sqls::prelude::*;
use sqls::{DialectConfig, configure};
use std::env;

fn print(label: &str, query: &BuiltQuery) {
    println!("-- {label}");
    println!("{}", query.sql);
    println!("   args: {:?}\n", query.args);
}

fn main() -> SqlResult<()> {
    if let Ok(prefix) = env::var("SQLS_PLACEHOLDER") {
        configure(&DialectConfig::new(prefix))?;
    }

    let q = select_from("users u")
        .select_cols(&["u.id", "u.name", "r.name AS role"])
        .left_join("roles r", "r.id", "u.role_id")
        .and_eq("u.active", true)
        .and_in("u.state", ["Washington", "Oregon"])
        .and_is_null("u.deleted_at")
        .order_by("u.id DESC")
        .limit(20)
        .build()?;
    print("select", &q);

    let q = insert_into("users")
        .set("email", "alice@example.com")
        .set("name", "Alice")
        .on_conflict("(email) DO NOTHING")
        .returning("id")
        .build()?;
    print("insert", &q);

    let mut batch = insert_many_into("users");
    batch.columns(&["name", "age"]);
    for (name, age) in [("John", 30), ("Jane", 25), ("Mary", 35)] {
        batch.add_row(values![name, age]);
    }
    print("insert many", &batch.build()?);

    let q = update_table("users")
        .set_values([KeyVal::new("active", false), KeyVal::new("note", "bulk")])
        .and_compare("last_login", "<", "2020-01-01")
        .build()?;
    print("update", &q);

    let q = delete_from("sessions").and_lt("expires_at", 1_700_000_000).build()?;
    print("delete", &q);

    Ok(())
}
