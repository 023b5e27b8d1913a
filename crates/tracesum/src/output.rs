use tracesum_core::model::display::DisplayRow;

pub fn print_rows_human(rows: &[DisplayRow], focus_service: Option<&str>) {
    for row in rows {
        println!("{}", format_row(row, focus_service));
    }
    println!("-- {} traces --", rows.len());
}

pub fn format_row(row: &DisplayRow, focus_service: Option<&str>) -> String {
    let mut line = format!(
        "{} trace={} duration={} width={}% spans={}",
        row.start_ts, row.trace_id, row.duration_str, row.width, row.span_count
    );
    if let Some(service) = focus_service {
        line.push_str(&format!(" {service}={}%", row.service_percentage));
    }
    let services: Vec<String> = row
        .service_durations
        .iter()
        .map(|s| format!("{}x{} max={}ms", s.name, s.count, s.max))
        .collect();
    if !services.is_empty() {
        line.push_str(" | ");
        line.push_str(&services.join(", "));
    }
    line
}
