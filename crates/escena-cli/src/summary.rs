use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use escena_cli::report::{FacetReport, RoleSuggestions, ScheduleReport, SearchRow, StatRow};
use escena_filter::FacetOption;
use escena_taxonomy::CheckReport;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn option_cells(option: &FacetOption, selected: Option<&str>) -> Vec<Cell> {
    let id = if selected == Some(option.id.as_str()) {
        Cell::new(&option.id)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else if option.is_all() {
        dim_cell(&option.id)
    } else {
        Cell::new(&option.id)
    };
    vec![id, Cell::new(&option.label)]
}

pub fn print_options(options: &[FacetOption]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Id"), header_cell("Label")]);
    apply_table_style(&mut table);
    for option in options {
        table.add_row(option_cells(option, None));
    }
    println!("{table}");
}

fn stat_table(stats: &[StatRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stat"),
        header_cell("Name"),
        header_cell("Kind"),
        header_cell("Values"),
    ]);
    apply_table_style(&mut table);
    for stat in stats {
        table.add_row(vec![
            Cell::new(&stat.id),
            Cell::new(&stat.name),
            dim_cell(stat.kind),
            Cell::new(&stat.detail),
        ]);
    }
    table
}

pub fn print_facets(report: &FacetReport) {
    println!("Domain: {} ({})", report.domain, report.locale);
    for level in &report.levels {
        let selected = level.selected.as_deref().unwrap_or("-");
        println!();
        println!("{} [{selected}]", level.level);
        if level.options.is_empty() {
            println!("  (no options)");
            continue;
        }
        let mut table = Table::new();
        table.set_header(vec![header_cell("Id"), header_cell("Label")]);
        apply_table_style(&mut table);
        for option in &level.options {
            table.add_row(option_cells(option, level.selected.as_deref()));
        }
        println!("{table}");
    }
    if !report.extra_tags.is_empty() {
        println!();
        println!("extra tags");
        let mut table = Table::new();
        table.set_header(vec![header_cell("Id"), header_cell("Label")]);
        apply_table_style(&mut table);
        for tag in &report.extra_tags {
            let selected = report.selection.extra_tags.contains(&tag.id);
            table.add_row(option_cells(tag, selected.then_some(tag.id.as_str())));
        }
        println!("{table}");
    }
    if !report.stats.is_empty() {
        println!();
        println!("stat fields");
        println!("{}", stat_table(&report.stats));
    }
    println!();
    println!("Active filters: {}", report.active_filters);
}

pub fn print_search(rows: &[SearchRow]) {
    if rows.is_empty() {
        println!("No matches.");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Level"),
        header_cell("Path"),
        header_cell("Names"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        table.add_row(vec![
            dim_cell(row.level),
            Cell::new(&row.path),
            Cell::new(&row.breadcrumb),
        ]);
    }
    println!("{table}");
}

pub fn print_suggestions(suggestions: &RoleSuggestions) {
    println!("Role: {}", suggestions.breadcrumb);
    if suggestions.tags.is_empty() && suggestions.stats.is_empty() {
        println!("No suggestions.");
        return;
    }
    if !suggestions.tags.is_empty() {
        println!();
        print_options(&suggestions.tags);
    }
    if !suggestions.stats.is_empty() {
        println!();
        println!("{}", stat_table(&suggestions.stats));
    }
}

pub fn print_schedule(report: &ScheduleReport) {
    println!("Input: {:?}", report.input);
    println!("Shape: {}", report.shape.name());
    println!("Canonical: {}", report.canonical);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Day"),
        header_cell("Enabled"),
        header_cell("Start"),
        header_cell("End"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for entry in report.schedule.entries() {
        let name = escena_schedule::long_name(entry.day);
        if entry.enabled {
            table.add_row(vec![
                Cell::new(name),
                Cell::new("yes").fg(Color::Green),
                Cell::new(escena_schedule::format_time_full(entry.start)),
                Cell::new(escena_schedule::format_time_full(entry.end)),
            ]);
        } else {
            table.add_row(vec![
                dim_cell(name),
                dim_cell("no"),
                dim_cell("-"),
                dim_cell("-"),
            ]);
        }
    }
    println!("{table}");
}

pub fn print_check(report: &CheckReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Domain"),
        header_cell("Levels"),
        header_cell("Nodes"),
        header_cell("Leaves"),
        header_cell("Annotated"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for domain in &report.domains {
        let levels = domain
            .levels
            .iter()
            .map(|(name, count)| format!("{name}: {count}"))
            .collect::<Vec<_>>()
            .join(", ");
        let nodes: usize = domain.levels.iter().map(|(_, count)| count).sum();
        table.add_row(vec![
            Cell::new(domain.domain)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(levels),
            Cell::new(nodes),
            Cell::new(domain.leaves),
            Cell::new(domain.annotated),
        ]);
    }
    println!("{table}");
}
