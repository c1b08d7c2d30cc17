//! Aligned text tables for query results
//!
//! Column widths are computed from the widest cell per column; output is a
//! header line, a separator, the data rows and a row-count footer.

pub trait Tabular {
    fn headers() -> &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

pub fn render<T: Tabular>(rows: &[T]) -> String {
    let headers = T::headers();
    let cells: Vec<Vec<String>> = rows.iter().map(Tabular::cells).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let mut out = String::new();

    let header_line: Vec<String> = headers
        .iter()
        .zip(widths.iter().copied())
        .map(|(h, w)| format!("{h:<w$}"))
        .collect();
    out.push_str(&header_line.join(" | "));
    out.push('\n');

    let total: usize = widths.iter().sum::<usize>() + (widths.len() - 1) * 3;
    out.push_str(&"-".repeat(total));
    out.push('\n');

    for row in &cells {
        let line: Vec<String> = row
            .iter()
            .zip(widths.iter().copied())
            .map(|(c, w)| format!("{c:<w$}"))
            .collect();
        out.push_str(&line.join(" | "));
        out.push('\n');
    }

    if rows.len() == 1 {
        out.push_str("1 row in set");
    } else {
        out.push_str(&format!("{} rows in set", rows.len()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        name: String,
        value: String,
    }

    impl Tabular for Pair {
        fn headers() -> &'static [&'static str] {
            &["name", "value"]
        }

        fn cells(&self) -> Vec<String> {
            vec![self.name.clone(), self.value.clone()]
        }
    }

    #[test]
    fn columns_align_to_widest_cell() {
        let rows = vec![
            Pair {
                name: "a".into(),
                value: "short".into(),
            },
            Pair {
                name: "much-longer".into(),
                value: "x".into(),
            },
        ];
        let rendered = render(&rows);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "name        | value");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "a           | short");
        assert_eq!(lines[3], "much-longer | x    ");
        assert_eq!(lines[4], "2 rows in set");
    }

    #[test]
    fn single_row_footer_is_singular() {
        let rows = vec![Pair {
            name: "a".into(),
            value: "b".into(),
        }];
        assert!(render(&rows).ends_with("1 row in set"));
    }
}
