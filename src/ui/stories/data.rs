//! Sample datasets and column sets for the table stories.

use std::collections::BTreeSet;

use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};

use super::Row;
use crate::tui::components::Column;
use crate::types::{Record, Value};

const ROLES: [&str; 3] = ["Admin", "User", "Moderator"];

fn user(id: i64, name: &str, email: &str, role: &str, status: &str, join_date: &str) -> Row {
	Row::from([
		("id".to_string(), Value::Int(id)),
		("name".to_string(), Value::from(name)),
		("email".to_string(), Value::from(email)),
		("role".to_string(), Value::from(role)),
		("status".to_string(), Value::from(status)),
		("joinDate".to_string(), Value::from(join_date)),
	])
}

fn product(id: i64, name: &str, category: &str, price: f64, in_stock: bool, rating: f64) -> Row {
	Row::from([
		("id".to_string(), Value::Int(id)),
		("name".to_string(), Value::from(name)),
		("category".to_string(), Value::from(category)),
		("price".to_string(), Value::Float(price)),
		("inStock".to_string(), Value::Bool(in_stock)),
		("rating".to_string(), Value::Float(rating)),
	])
}

#[must_use]
pub fn users() -> Vec<Row> {
	vec![
		user(1, "John Doe", "john@example.com", "Admin", "active", "2023-01-15"),
		user(2, "Jane Smith", "jane@example.com", "User", "active", "2023-02-20"),
		user(3, "Bob Johnson", "bob@example.com", "User", "inactive", "2023-03-10"),
		user(4, "Alice Brown", "alice@example.com", "Moderator", "active", "2023-01-25"),
		user(5, "Charlie Wilson", "charlie@example.com", "User", "active", "2023-04-05"),
	]
}

#[must_use]
pub fn products() -> Vec<Row> {
	vec![
		product(1, "Laptop Pro", "Electronics", 1299.99, true, 4.5),
		product(2, "Wireless Mouse", "Electronics", 29.99, true, 4.2),
		product(3, "Office Chair", "Furniture", 199.99, false, 4.0),
		product(4, "Standing Desk", "Furniture", 299.99, true, 4.7),
		product(5, "Webcam HD", "Electronics", 79.99, true, 3.8),
	]
}

/// `count` generated users. Status and join date come from a fixed-seed
/// xorshift so every run shows the same rows.
pub(super) fn generated_users(count: usize) -> Vec<Row> {
	let mut state: u32 = 0x2545_f491;
	let mut next = move || {
		state ^= state << 13;
		state ^= state >> 17;
		state ^= state << 5;
		state
	};

	(1..=count)
		.map(|n| {
			let status = if next() % 10 < 7 { "active" } else { "inactive" };
			let month = next() % 12 + 1;
			let day = next() % 28 + 1;
			user(
				n as i64,
				&format!("User {n}"),
				&format!("user{n}@example.com"),
				ROLES[(n - 1) % ROLES.len()],
				status,
				&format!("2023-{month:02}-{day:02}"),
			)
		})
		.collect()
}

fn badge(text: String, positive: bool) -> Line<'static> {
	let color = if positive { Color::Green } else { Color::Red };
	Line::from(vec![Span::styled("● ", Style::new().fg(color)), Span::raw(text)])
}

fn status_column() -> Column<Row> {
	Column::new("status", "Status")
		.sortable()
		.width(10)
		.render_with(|value, _| badge(value.to_string(), value.as_str() == Some("active")))
}

pub(super) fn user_columns() -> Vec<Column<Row>> {
	vec![
		Column::new("id", "ID").sortable().width(6),
		Column::new("name", "Name").sortable(),
		Column::new("email", "Email").sortable(),
		Column::new("role", "Role").sortable(),
		status_column(),
		Column::new("joinDate", "Join Date").sortable().width(10),
	]
}

pub(super) fn product_columns() -> Vec<Column<Row>> {
	vec![
		Column::new("id", "ID").sortable().width(6),
		Column::new("name", "Product Name").sortable(),
		Column::new("category", "Category").sortable(),
		Column::new("price", "Price")
			.sortable()
			.width(10)
			.render_with(|value, _| {
				value
					.as_f64()
					.map(|price| Line::from(format!("${price:.2}")))
					.unwrap_or_default()
			}),
		Column::new("inStock", "In Stock")
			.sortable()
			.width(9)
			.render_with(|value, _| {
				let in_stock = value.as_bool().unwrap_or(false);
				badge(if in_stock { "Yes" } else { "No" }.to_string(), in_stock)
			}),
		Column::new("rating", "Rating")
			.sortable()
			.width(7)
			.render_with(|value, _| {
				value
					.as_f64()
					.map(|rating| {
						Line::from(vec![
							Span::styled("★", Style::new().fg(Color::Yellow)),
							Span::raw(format!(" {rating:.1}")),
						])
					})
					.unwrap_or_default()
			}),
	]
}

/// Users with an initials avatar, the email next to the name and US dates.
pub(super) fn profile_columns() -> Vec<Column<Row>> {
	vec![
		Column::new("id", "ID").sortable().width(6),
		Column::new("name", "User").sortable().render_with(|value, row: &Row| {
			let name = value.to_string();
			Line::from(vec![
				Span::styled(
					format!(" {} ", initials(&name)),
					Style::new().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
				),
				Span::raw(" "),
				Span::raw(name).bold(),
				Span::raw("  "),
				Span::styled(row.value("email").to_string(), Style::new().add_modifier(Modifier::DIM)),
			])
		}),
		Column::new("role", "Role").sortable().width(10),
		status_column(),
		Column::new("joinDate", "Member Since")
			.sortable()
			.width(12)
			.render_with(|value, _| Line::from(us_date(&value.to_string()))),
	]
}

/// One sortable column per field found in `data`, `id` first.
#[must_use]
pub fn columns_for(data: &[Row]) -> Vec<Column<Row>> {
	let keys = data
		.iter()
		.flat_map(|row| row.keys().map(String::as_str))
		.collect::<BTreeSet<_>>();
	let (ids, rest): (Vec<_>, Vec<_>) = keys.into_iter().partition(|key| *key == "id");
	ids.into_iter()
		.chain(rest)
		.map(|key| Column::new(key, header_for(key)).sortable())
		.collect()
}

fn initials(name: &str) -> String {
	name.split_whitespace()
		.filter_map(|part| part.chars().next())
		.collect()
}

/// `2023-01-15` as `1/15/2023`. Anything else is returned unchanged.
fn us_date(iso: &str) -> String {
	let parts = iso
		.split('-')
		.map(str::parse::<u32>)
		.collect::<Result<Vec<_>, _>>();
	match parts.as_deref() {
		Ok([year, month, day]) => format!("{month}/{day}/{year}"),
		_ => iso.to_string(),
	}
}

/// Title-cased header for a field name: `joinDate` and `join_date` both
/// become `Join Date`; `id` becomes `ID`.
fn header_for(key: &str) -> String {
	if key.eq_ignore_ascii_case("id") {
		return "ID".to_string();
	}
	let mut words: Vec<String> = Vec::new();
	let mut current = String::new();
	for ch in key.chars() {
		if ch == '_' || ch == '-' || ch == ' ' {
			if !current.is_empty() {
				words.push(std::mem::take(&mut current));
			}
		} else if ch.is_uppercase() && !current.is_empty() {
			words.push(std::mem::take(&mut current));
			current.push(ch);
		} else {
			current.push(ch);
		}
	}
	if !current.is_empty() {
		words.push(current);
	}
	words
		.iter()
		.map(|word| {
			let mut chars = word.chars();
			chars
				.next()
				.map(|first| first.to_uppercase().chain(chars).collect::<String>())
				.unwrap_or_default()
		})
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn generated_users_are_deterministic() {
		let first = generated_users(50);
		assert_eq!(first.len(), 50);
		assert_eq!(first, generated_users(50));
		assert_eq!(first[0]["role"], Value::from("Admin"));
		assert_eq!(first[1]["role"], Value::from("User"));
		assert_eq!(first[2]["role"], Value::from("Moderator"));
		assert_eq!(first[49]["email"], Value::from("user50@example.com"));
	}

	#[test]
	fn headers_are_title_cased() {
		assert_eq!(header_for("joinDate"), "Join Date");
		assert_eq!(header_for("in_stock"), "In Stock");
		assert_eq!(header_for("id"), "ID");
		assert_eq!(header_for("name"), "Name");
	}

	#[test]
	fn columns_for_puts_id_first() {
		let data = vec![Row::from([
			("name".to_string(), Value::from("Ada")),
			("id".to_string(), Value::Int(1)),
			("age".to_string(), Value::Int(36)),
		])];
		let keys = columns_for(&data)
			.iter()
			.map(|column| column.key().to_string())
			.collect::<Vec<_>>();
		assert_eq!(keys, ["id", "age", "name"]);
		assert!(columns_for(&data).iter().all(Column::is_sortable));
	}

	#[test]
	fn dates_and_initials() {
		assert_eq!(us_date("2023-01-15"), "1/15/2023");
		assert_eq!(us_date("soon"), "soon");
		assert_eq!(initials("Charlie Wilson"), "CW");
	}

	#[test]
	fn product_cells_are_formatted() {
		let columns = product_columns();
		let laptop = &products()[0];
		let text = |index: usize| columns[index].cell(laptop).to_string();
		assert_eq!(text(3), "$1299.99");
		assert_eq!(text(4), "● Yes");
		assert_eq!(text(5), "★ 4.5");
	}
}
