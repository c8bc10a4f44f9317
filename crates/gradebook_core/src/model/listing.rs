//! Grade listing presentation.
//!
//! # Responsibility
//! - Render module records as tab-separated text lines.
//! - Provide the grade-descending view without touching canonical order.
//!
//! # Invariants
//! - Line format is `"<first_name> <surname> <id>\t<grade>\n"`.
//! - `rank_by_grade` returns a new vector; its input is never reordered.
//! - Equal grades keep their insertion order (stable sort).

use crate::model::module::{Module, ModuleRecord};
use std::io::{self, Write};

/// Returns a copy of `records` sorted by grade, highest first.
pub fn rank_by_grade(records: &[ModuleRecord]) -> Vec<ModuleRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.grade.cmp(&a.grade));
    ranked
}

/// Writes one line per record, in the order given.
pub fn write_records<'a, W, I>(out: &mut W, records: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a ModuleRecord>,
{
    for record in records {
        writeln!(out, "{}\t{}", record.student, record.grade)?;
    }
    Ok(())
}

impl Module {
    /// Writes records in canonical (insertion) order.
    pub fn write_unordered<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write_records(out, &self.grades)
    }

    /// Writes records sorted by grade descending.
    pub fn write_ordered<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write_records(out, &rank_by_grade(&self.grades))
    }

    /// Canonical-order listing as a string.
    pub fn listing(&self) -> String {
        render(|buf| self.write_unordered(buf))
    }

    /// Grade-descending listing as a string.
    pub fn ordered_listing(&self) -> String {
        render(|buf| self.write_ordered(buf))
    }

    /// Prints the canonical-order listing to stdout.
    pub fn print(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = self.write_unordered(&mut stdout) {
            log::warn!(
                "event=module_print module=listing status=error module_name={} error={err}",
                self.name
            );
        }
    }

    /// Prints the grade-descending listing to stdout.
    pub fn print_ordered(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(err) = self.write_ordered(&mut stdout) {
            log::warn!(
                "event=module_print_ordered module=listing status=error module_name={} error={err}",
                self.name
            );
        }
    }
}

fn render(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec<u8> cannot fail.
    let _ = write(&mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::{rank_by_grade, write_records};
    use crate::model::module::{Module, ModuleRecord};
    use crate::model::student::Student;

    fn record(first: &str, id: u32, grade: i32) -> ModuleRecord {
        ModuleRecord::new(Student::with_id(id, first, "X"), grade)
    }

    #[test]
    fn rank_by_grade_sorts_descending_and_leaves_input_alone() {
        let records = vec![record("A", 1, 70), record("B", 2, 10), record("C", 3, 99)];

        let ranked = rank_by_grade(&records);

        let order: Vec<_> = ranked.iter().map(|r| r.student.first_name.as_str()).collect();
        assert_eq!(order, ["C", "A", "B"]);
        assert_eq!(records[0].student.first_name, "A");
    }

    #[test]
    fn rank_by_grade_keeps_insertion_order_for_ties() {
        let records = vec![record("A", 1, 50), record("B", 2, 80), record("C", 3, 50)];

        let ranked = rank_by_grade(&records);

        let order: Vec<_> = ranked.iter().map(|r| r.student.first_name.as_str()).collect();
        assert_eq!(order, ["B", "A", "C"]);
    }

    #[test]
    fn write_records_uses_tab_and_newline() {
        let records = [record("Sherlock", 221, 100)];
        let mut out = Vec::new();

        write_records(&mut out, &records).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Sherlock X 221\t100\n");
    }

    #[test]
    fn empty_module_renders_nothing() {
        let module = Module::new("Empty");
        assert_eq!(module.listing(), "");
        assert_eq!(module.ordered_listing(), "");
    }
}
