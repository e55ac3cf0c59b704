//! Purpose: Fixed end-to-end demonstration of the roster contract.
//! Exports: `run`.
//! Role: Exercises add, remove (found and missing), and list once, in order.
//! Invariants: The sequence and its console output are stable; it takes no input.
use rollcall::core::record::Record;
use rollcall::core::roster::Roster;
use rollcall::render;

pub(crate) fn run() {
    let mut roster = Roster::new();

    for record in [
        Record::new("Alice", 20, "Computer Science"),
        Record::new("Bob", 22, "Mathematics"),
        Record::new("Charlie", 21, "Physics"),
    ] {
        add_and_report(&mut roster, record);
    }

    print_listing(&roster);

    println!("{}", render::remove_line(&roster.remove("Bob")));
    print_listing(&roster);

    // A missing name is a normal outcome; nothing to escalate.
    println!("{}", render::remove_line(&roster.remove("David")));

    add_and_report(&mut roster, Record::new("Eve", 23, "Biology"));
    print_listing(&roster);
}

fn add_and_report(roster: &mut Roster, record: Record) {
    let name = record.name.clone();
    roster.add(record);
    println!("{}", render::added_line(&name));
}

fn print_listing(roster: &Roster) {
    for line in render::listing_lines(roster.records()) {
        println!("{line}");
    }
}
