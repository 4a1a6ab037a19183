//! Plain-text table rendering for `--format table`.

/// Render headers and rows as an aligned text table, shrinking the widest
/// columns when a maximum width is given.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], max_width: Option<usize>) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
                .max(6)
        })
        .collect();

    fit_widths(&mut widths, headers, max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, width)| {
                    let value = row.get(index).cloned().unwrap_or_else(|| "-".to_string());
                    format_cell(&truncate_text(&value, *width), *width)
                })
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>();

    let mut lines = Vec::with_capacity(2 + row_lines.len());
    lines.push(header_line);
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    if widths.is_empty() {
        return;
    }

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    // Shave one character at a time off the widest shrinkable column.
    while total > max_width {
        let mut candidate_idx = None;
        let mut candidate_width = 0usize;
        for (idx, width) in widths.iter().enumerate() {
            let min_width = headers[idx].len().max(6);
            if *width > min_width && *width > candidate_width {
                candidate_idx = Some(idx);
                candidate_width = *width;
            }
        }

        let Some(idx) = candidate_idx else {
            break;
        };

        widths[idx] = widths[idx].saturating_sub(1);
        total = widths.iter().sum::<usize>() + separators;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out = String::new();
    for ch in value.chars().take(width - 1) {
        out.push(ch);
    }
    out.push('…');
    out
}

fn format_cell(value: &str, width: usize) -> String {
    let len = value.chars().count();
    let padding = width.saturating_sub(len);
    format!("{value}{}", " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::render_entity_table;

    #[test]
    fn aligns_columns() {
        let headers = ["id", "title"];
        let rows = vec![
            vec!["ses-1".to_string(), "Primeira Sessão Ordinária".to_string()],
            vec!["ses-2".to_string(), "Segunda".to_string()],
        ];
        let out = render_entity_table(&headers, &rows, None);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        // Both data rows start their second column at the same offset.
        let offset = lines[2].find("Primeira").expect("first row");
        assert_eq!(lines[3].find("Segunda"), Some(offset));
    }

    #[test]
    fn truncates_to_max_width() {
        let headers = ["id", "subject"];
        let rows = vec![vec![
            "doc-1".to_string(),
            "Moção de aplauso aos professores da rede municipal de ensino".to_string(),
        ]];
        let out = render_entity_table(&headers, &rows, Some(40));
        for line in out.lines() {
            assert!(line.chars().count() <= 40, "line too wide: {line}");
        }
        assert!(out.contains('…'));
    }

    #[test]
    fn missing_cells_render_dash() {
        let headers = ["a", "b"];
        let rows = vec![vec!["x".to_string()]];
        let out = render_entity_table(&headers, &rows, None);
        assert!(out.lines().nth(2).is_some_and(|line| line.contains('-')));
    }
}
