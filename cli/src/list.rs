use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use todolist_core::{short_id, FilterControl, RowView};

// Helper struct for Table Row
#[derive(Tabled)]
struct ListRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Done")]
    done: &'static str,
    #[tabled(rename = "Task")]
    text: String,
}

pub fn render_filter_bar(controls: &[FilterControl]) -> String {
    let labels: Vec<String> = controls
        .iter()
        .map(|c| {
            if c.active {
                format!("[{}]", c.filter)
            } else {
                c.filter.to_string()
            }
        })
        .collect();
    format!("Filter: {}", labels.join(" "))
}

pub fn render_rows(rows: &[RowView]) -> Option<String> {
    if rows.is_empty() {
        return None;
    }

    let table_rows: Vec<ListRow> = rows
        .iter()
        .map(|row| ListRow {
            position: row.index + 1,
            id: short_id(&row.id),
            done: if row.completed { "[x]" } else { "[ ]" },
            text: row.text.clone(),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    Some(table.to_string())
}

pub fn show_list(controls: &[FilterControl], rows: &[RowView]) {
    println!("{}", render_filter_bar(controls));
    match render_rows(rows) {
        Some(table) => println!("{}", table),
        None => println!("No tasks found."),
    }
}
