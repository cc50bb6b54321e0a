use admitscore::api::Review;
use admitscore::record::SubjectResults;
use admitscore::scorer::GradeCounts;
use admitscore::subjects::display_label;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn student(review: &Review) {
    let name = if review.record.candidate_name.is_empty() {
        "(not found)"
    } else {
        review.record.candidate_name.as_str()
    };

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Source").add_attribute(Attribute::Bold),
        Cell::new(&review.source),
    ]);
    table.add_row(vec![
        Cell::new("Candidate Name").add_attribute(Attribute::Bold),
        Cell::new(name),
    ]);
    table.add_row(vec![
        Cell::new("Major").add_attribute(Attribute::Bold),
        Cell::new(review.major.to_string()),
    ]);
    println!("\n{}", table);
}

pub fn grades(counts: &GradeCounts) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Grade").add_attribute(Attribute::Bold),
        Cell::new("Count").add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    for (grade, count) in counts.iter() {
        let cell = Cell::new(count);
        let cell = if count > 0 { cell.fg(Color::Cyan) } else { cell };
        table.add_row(vec![Cell::new(grade), cell]);
    }
    println!("\n{}", table);
}

pub fn scores(review: &Review) {
    let r = &review.report;
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Score").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    if let Some(col) = table.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }

    table.add_row(vec![Cell::new("Aggregate"), Cell::new(r.aggregate_score)]);
    table.add_row(vec![
        Cell::new("Exam Score").add_attribute(Attribute::Bold),
        Cell::new(r.final_score).fg(Color::Green),
    ]);
    table.add_row(vec![Cell::new("Core Maths"), Cell::new(r.core_maths_score)]);
    if review.major.shows_science_scores() {
        table.add_row(vec![
            Cell::new("Elective Maths"),
            Cell::new(r.elective_maths_score),
        ]);
        table.add_row(vec![Cell::new("Physics"), Cell::new(r.physics_score)]);
    }
    println!("\n{}", table);
}

pub fn details(results: &SubjectResults) {
    if results.is_empty() {
        println!("\nNo subject results found.");
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Subject").add_attribute(Attribute::Bold),
        Cell::new("Grade").add_attribute(Attribute::Bold),
    ]);
    for (subject, grade) in results.iter() {
        table.add_row(vec![Cell::new(display_label(subject)), Cell::new(grade)]);
    }
    println!("\n{}", table);
}

pub fn summary(reviews: &[Review]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Source").add_attribute(Attribute::Bold),
        Cell::new("Candidate").add_attribute(Attribute::Bold),
        Cell::new("Subjects"),
        Cell::new("Aggregate"),
        Cell::new("Exam").fg(Color::Green),
        Cell::new("Core"),
        Cell::new("Elect"),
        Cell::new("Phys"),
    ]);
    for i in 2..=7 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for review in reviews {
        let r = &review.report;
        table.add_row(vec![
            Cell::new(&review.source).add_attribute(Attribute::Bold),
            Cell::new(&review.record.candidate_name),
            Cell::new(review.record.results.len()),
            Cell::new(r.aggregate_score),
            Cell::new(r.final_score).fg(Color::Green),
            Cell::new(r.core_maths_score),
            Cell::new(r.elective_maths_score),
            Cell::new(r.physics_score),
        ]);
    }
    println!("\n{}", table);
}
