//! Gradebook demo entry point.
//!
//! # Responsibility
//! - Run a fixed demonstration against the `gradebook_core` public API.
//! - Abort on the first violated invariant; exit 0 otherwise.
//!
//! Logging starts only when `GRADEBOOK_LOG_DIR` is set; the level comes from
//! `GRADEBOOK_LOG_LEVEL` or the build-mode default.

use gradebook_core::{
    core_version, default_log_level, init_logging, IdAllocator, Module, ModuleRecord, Student,
};

const LOG_DIR_ENV: &str = "GRADEBOOK_LOG_DIR";
const LOG_LEVEL_ENV: &str = "GRADEBOOK_LOG_LEVEL";

fn main() {
    if let Ok(log_dir) = std::env::var(LOG_DIR_ENV) {
        let level =
            std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
        if let Err(err) = init_logging(&level, &log_dir) {
            eprintln!("gradebook: logging disabled: {err}");
        }
    }
    log::info!(
        "event=demo_start module=cli status=ok version={}",
        core_version()
    );

    let mut ids = IdAllocator::new();

    let sherlock = Student::with_id(221, "Sherlock", "Holmes");
    sherlock.print();
    println!();

    let tom = Student::new(&mut ids, "Tom", "Breza");
    let tristan = Student::new(&mut ids, "Tristan", "Brindle");
    assert_eq!(tom.id, 1);
    assert_eq!(tristan.id, 2);

    ids.reset();
    let mut module = Module::with_records(
        "Initial C++",
        vec![
            ModuleRecord::new(Student::new(&mut ids, "Annie", "Appleby"), 70),
            ModuleRecord::new(Student::new(&mut ids, "Benjamin", "Button"), 10),
        ],
    );
    module.add_record(Student::new(&mut ids, "Claire", "Cotton"), 99);
    assert_eq!(module.len(), 3);

    println!();
    module.print();
    println!();
    module.print_ordered();

    log::info!(
        "event=demo_done module=cli status=ok records={}",
        module.len()
    );
}
