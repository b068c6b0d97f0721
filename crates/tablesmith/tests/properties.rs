use proptest::prelude::*;
use tablesmith::layout::{fit, Fitted};
use tablesmith::{display_width, Cell, Column, ResponsiveMode, Table, Theme};

fn visible_count(table: &Table) -> usize {
    match fit(table).unwrap() {
        Fitted::Horizontal(view) => view.columns.len(),
        Fitted::Stacked(_) => unreachable!("hide mode never stacks"),
    }
}

/// Four columns under a tall cell, a wide cell and plain cells.
fn spanned_table(cells: &[String], priorities: &[i32]) -> Table {
    let mut table = wide_table(cells, priorities);
    table.clear_rows();
    table.add_row(vec![
        Cell::new(cells[0].as_str()).row_span(2),
        Cell::new(cells[1].as_str()).col_span(2),
        Cell::new(cells[2].as_str()),
    ]);
    table.add_row(vec![
        Cell::new(cells[3].as_str()),
        Cell::new(cells[1].as_str()),
        Cell::new(cells[2].as_str()),
    ]);
    table
}

fn wide_table(cells: &[String], priorities: &[i32]) -> Table {
    let columns: Vec<Column> = priorities
        .iter()
        .enumerate()
        .map(|(i, p)| Column::new(format!("c{i}")).priority(*p))
        .collect();
    let mut table = Table::new()
        .with_columns(columns)
        .responsive(ResponsiveMode::Hide);
    table.add_row(cells[..priorities.len()].to_vec());
    table
}

proptest! {
    #[test]
    fn test_fixed_width_is_exact(
        width in 1usize..20,
        content in "[a-zA-Z 日本語テスト]{0,60}",
        wrap in any::<bool>(),
    ) {
        let mut table = Table::new()
            .with_columns([Column::new("c").width(width).wrap_word(wrap)])
            .theme(Theme::ascii());
        table.add_row([content]);

        let out = table.render().unwrap();
        for line in out.lines() {
            prop_assert_eq!(display_width(line), width + 4, "{}", line);
        }
    }

    #[test]
    fn test_wider_target_never_hides_more(
        cells in prop::collection::vec("[a-z]{1,25}", 4),
        priorities in prop::collection::vec(0i32..5, 4),
        narrow in 5usize..60,
        extra in 0usize..60,
    ) {
        let table = wide_table(&cells, &priorities);
        let at_narrow = visible_count(&table.clone().terminal_width(narrow));
        let at_wide = visible_count(&table.terminal_width(narrow + extra));
        prop_assert!(at_wide >= at_narrow);
    }

    #[test]
    fn test_wider_target_never_hides_more_with_spans(
        cells in prop::collection::vec("[a-z]{1,25}", 4),
        priorities in prop::collection::vec(0i32..5, 4),
        narrow in 5usize..60,
        extra in 0usize..60,
    ) {
        let table = spanned_table(&cells, &priorities);
        let narrow_table = table.clone().terminal_width(narrow);
        let roomy = table.terminal_width(narrow + extra);
        prop_assert!(narrow_table.render().is_ok());
        prop_assert!(roomy.render().is_ok());
        prop_assert!(visible_count(&roomy) >= visible_count(&narrow_table));
    }

    #[test]
    fn test_render_twice_is_identical(
        rows in prop::collection::vec(prop::collection::vec("[a-z0-9 ]{0,12}", 3), 0..6),
        zebra in any::<bool>(),
        compact in any::<bool>(),
    ) {
        let mut table = Table::new()
            .with_columns(["a", "b", "c"])
            .zebra(zebra)
            .compact(compact);
        table.add_rows(rows);
        prop_assert_eq!(table.render().unwrap(), table.render().unwrap());
    }

    #[test]
    fn test_all_lines_share_one_width(
        rows in prop::collection::vec(prop::collection::vec("[a-z ]{0,15}", 2), 1..5),
    ) {
        let mut table = Table::new().with_columns(["left", "right"]);
        table.add_rows(rows);
        let out = table.render().unwrap();
        let first = display_width(out.lines().next().unwrap());
        prop_assert!(out.lines().all(|l| display_width(l) == first));
    }
}
