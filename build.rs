//! Build script for the embedded SQLite migrations.
//!
//! `sqlx::migrate!` reads `data/sql/sqlite` at compile time; without this
//! hint cargo would not rebuild when only a migration file changes.

fn main() {
    println!("cargo:rerun-if-changed=data/sql/sqlite");
}
