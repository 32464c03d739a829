use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use reel_cli::CleanReport;
use reel_model::{CanonicalRecord, CleaningOptions, DateParseMode};
use reel_report::{Dashboard, GroupCount, GroupMean, HistogramBin};

pub fn print_clean_summary(report: &CleanReport) {
    println!("Input: {}", report.input.display());
    match &report.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, nothing written)"),
    }
    println!("Columns: {}", report.columns.join(", "));
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Read"), Cell::new(report.rows_read)]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(report.duplicates_removed, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Undated rows dropped"),
        count_cell(report.undated_rows_dropped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Unnamed rows dropped"),
        count_cell(report.unnamed_rows_dropped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Runtime not parsed"),
        count_cell(report.runtime_gaps, Color::DarkGrey),
    ]);
    table.add_row(vec![
        Cell::new("Written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.rows_written).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if !report.columns_dropped.is_empty() {
        println!("Dropped columns: {}", report.columns_dropped.join(", "));
    }
}

pub fn print_dashboard(dashboard: &Dashboard) {
    println!("Movies: {}", dashboard.movies);
    print_ranking("Top rated", &dashboard.top_rated);
    print_ranking("Bottom rated", &dashboard.bottom_rated);
    print_means("Average rating by genre", "Genre", &dashboard.average_rating_by_genre);
    if let Some(means) = &dashboard.average_rating_by_movie_rated {
        print_means("Average rating by certification", "Rated", means);
    }
    print_counts("Movies per genre", &dashboard.genre_distribution);

    let mut decades = Table::new();
    decades.set_header(vec![header_cell("Decade"), header_cell("Movies")]);
    apply_table_style(&mut decades);
    align_column(&mut decades, 1, CellAlignment::Right);
    for entry in &dashboard.movies_by_decade {
        decades.add_row(vec![Cell::new(format!("{}s", entry.decade)), Cell::new(entry.count)]);
    }
    println!("Movies by decade");
    println!("{decades}");

    print_histogram("Rating distribution", &dashboard.rating_distribution);
    print_histogram("Runtime distribution (minutes)", &dashboard.runtime_distribution);
}

pub fn print_records(records: &[CanonicalRecord]) {
    if records.is_empty() {
        println!("No movies match.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Released"),
        header_cell("Genres"),
        header_cell("Rating"),
        header_cell("Runtime"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.name),
            Cell::new(record.release_date),
            Cell::new(record.genres.join(", ")),
            optional_cell(record.rating.map(|rating| format!("{rating:.1}"))),
            optional_cell(record.run_length.map(|minutes| format!("{minutes} min"))),
        ]);
    }
    println!("{table}");
}

pub fn print_schema(options: &CleaningOptions) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Setting"), header_cell("Value")]);
    apply_table_style(&mut table);
    let schema = &options.schema;
    let canonical: Vec<&str> = schema
        .canonical_columns
        .iter()
        .map(|column| column.as_str())
        .collect();
    table.add_row(vec![
        Cell::new("Required columns"),
        Cell::new(schema.required_columns.join(", ")),
    ]);
    table.add_row(vec![
        Cell::new("Dropped if present"),
        Cell::new(schema.drop_columns.join(", ")),
    ]);
    table.add_row(vec![Cell::new("Output order"), Cell::new(canonical.join(", "))]);
    table.add_row(vec![
        Cell::new("Genre delimiter"),
        Cell::new(format!("{:?}", schema.genre_delimiter)),
    ]);
    let mode = match options.date_mode {
        DateParseMode::Strict => "strict",
        DateParseMode::Lenient => "lenient",
    };
    table.add_row(vec![Cell::new("Date mode"), Cell::new(mode)]);
    println!("{table}");
}

fn print_ranking(title: &str, records: &[CanonicalRecord]) {
    println!("{title}");
    print_records(records);
}

fn print_means(title: &str, label: &str, means: &[GroupMean]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(label),
        header_cell("Mean rating"),
        header_cell("Movies"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in means {
        table.add_row(vec![
            Cell::new(&entry.key),
            Cell::new(format!("{:.2}", entry.mean)),
            Cell::new(entry.count),
        ]);
    }
    println!("{title}");
    println!("{table}");
}

fn print_counts(title: &str, counts: &[GroupCount]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Genre"), header_cell("Movies")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in counts {
        table.add_row(vec![Cell::new(&entry.key), Cell::new(entry.count)]);
    }
    println!("{title}");
    println!("{table}");
}

fn print_histogram(title: &str, bins: &[HistogramBin]) {
    if bins.is_empty() {
        return;
    }
    let widest = bins.iter().map(|bin| bin.count).max().unwrap_or(0).max(1);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Range"),
        header_cell("Count"),
        header_cell(""),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for bin in bins {
        let bar = "#".repeat(bin.count * 30 / widest);
        table.add_row(vec![
            Cell::new(format!("{:.1} - {:.1}", bin.lower, bin.upper)),
            Cell::new(bin.count),
            Cell::new(bar).fg(Color::Cyan),
        ]);
    }
    println!("{title}");
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell(count)
    } else {
        Cell::new(count).fg(color)
    }
}

fn optional_cell(value: Option<String>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
