//! Test fixtures: ready-made tables and their expected renderings.

use chrono::NaiveDate;
use fake::{faker::internet::en::Username, Fake};
use rowtext_domain::{Table, Value};

/// Expected default rendering of [`sample_table`]
pub const SAMPLE_GRID: &str = "\
+----+--------------+------------+
| id |   username   |  birthday  |
+----+--------------+------------+
|  1 |      turicas | 1987-04-29 |
|  2 | another-user | 2000-01-01 |
|  3 |       álvaro | 1900-01-01 |
+----+--------------+------------+";

/// Expected rendering of [`sample_table`] with `horizontal='+'`,
/// `junction='-'` and `vertical='*'`
pub const SAMPLE_GRID_CUSTOM_GLYPHS: &str = "\
-++++-++++++++++++++-++++++++++++-
* id *   username   *  birthday  *
-++++-++++++++++++++-++++++++++++-
*  1 *      turicas * 1987-04-29 *
*  2 * another-user * 2000-01-01 *
*  3 *       álvaro * 1900-01-01 *
-++++-++++++++++++++-++++++++++++-";

/// Expected default rendering of [`wide_header_table`]
pub const WIDE_HEADER_GRID: &str = "\
+----+----------+-----------------+
| id | username | big-column-name |
+----+----------+-----------------+
|  1 |        a |      1987-04-29 |
|  2 |        b |      2000-01-01 |
|  3 |        c |      1900-01-01 |
+----+----------+-----------------+";

/// Build a date value, panicking on an invalid date
pub fn date(year: i32, month: u32, day: u32) -> Value {
    Value::Date(NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date"))
}

/// `id`, `username`, `birthday` with three users, one of them non-ASCII
pub fn sample_table() -> Table {
    let mut table = Table::new(["id", "username", "birthday"]).expect("unique fields");
    table
        .extend(vec![
            vec![Value::from(1), Value::from("turicas"), date(1987, 4, 29)],
            vec![Value::from(2), Value::from("another-user"), date(2000, 1, 1)],
            vec![Value::from(3), Value::from("álvaro"), date(1900, 1, 1)],
        ])
        .expect("rows match fields");
    table
}

/// Table whose last header is wider than any of its cells
pub fn wide_header_table() -> Table {
    let mut table = Table::new(["id", "username", "big-column-name"]).expect("unique fields");
    table
        .extend(vec![
            vec![Value::from(1), Value::from("a"), date(1987, 4, 29)],
            vec![Value::from(2), Value::from("b"), date(2000, 1, 1)],
            vec![Value::from(3), Value::from("c"), date(1900, 1, 1)],
        ])
        .expect("rows match fields");
    table
}

/// `id`, `username` table with randomly generated user names
pub fn random_user_table(rows: usize) -> Table {
    let mut table = Table::new(["id", "username"]).expect("unique fields");
    for id in 0..rows {
        let username: String = Username().fake();
        table
            .append(vec![Value::from(id as i64), Value::from(username)])
            .expect("rows match fields");
    }
    table
}
