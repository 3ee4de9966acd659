pub struct Row {
    pub label: String,
    pub value: String,
}

impl Row {
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self {
            label: label.into(),
            value: value.to_string(),
        }
    }
}

pub fn make_report(rows: &[Row]) -> String {
    let label_width = rows.iter().map(|r| r.label.len()).max().unwrap_or(0);

    let mut body = String::new();
    let mut max_len = 0;
    for row in rows {
        let label = console::pad_str(&row.label, label_width, console::Alignment::Left, None);
        let line = format!("{label} -> {}\n", row.value);
        if line.len() > max_len {
            max_len = line.len();
        }
        body.push_str(&line);
    }

    let sep = "=".repeat(max_len.saturating_sub(1));
    format!("{}\n{}{}\n", sep, body, sep)
}

pub fn print_report(rows: &[Row]) {
    print!("{}", make_report(rows));
}

pub fn format_list(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn aligns_labels() {
        let rows = vec![Row::new("prime 17", true), Row::new("reverse 120", 21)];
        let sep = "=".repeat(19);
        assert_eq!(
            make_report(&rows),
            format!("{sep}\nprime 17    -> true\nreverse 120 -> 21\n{sep}\n")
        );
    }

    #[test]
    fn formats_lists() {
        assert_eq!(format_list(&[1, 2, 3, 4, 6, 12]), "[1, 2, 3, 4, 6, 12]");
        assert_eq!(format_list(&[]), "[]");
    }
}
