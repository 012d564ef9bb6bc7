//! Property value rendering.

use crate::types::{DateValue, Formula, PropertyValue, User, plain_text};

/// Placeholder for a formula whose result type is not modeled.
const FORMULA_PLACEHOLDER: &str = "Formula value";

/// Placeholder for an absent number or formula result.
const NO_VALUE: &str = "No value";

/// Render a property value as a single display string.
///
/// Total over every variant: absent single values become a named empty
/// state and unknown types become a fixed fallback.
#[must_use]
pub fn render_property(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Title(runs) | PropertyValue::RichText(runs) => plain_text(runs),
        PropertyValue::Number(number) => number.map_or_else(|| NO_VALUE.to_owned(), format_number),
        PropertyValue::Select(option) => option
            .as_ref()
            .map_or_else(|| "No selection".to_owned(), |o| o.name.clone()),
        PropertyValue::MultiSelect(options) => join(options.iter().map(|o| o.name.as_str())),
        PropertyValue::Date(date) => date
            .as_ref()
            .map_or_else(|| "No date".to_owned(), format_date),
        PropertyValue::Checkbox(checked) => (if *checked { "Yes" } else { "No" }).to_owned(),
        PropertyValue::Url(url) => or_empty_state(url.as_deref(), "No link"),
        PropertyValue::Email(email) => or_empty_state(email.as_deref(), "No email"),
        PropertyValue::PhoneNumber(phone) => or_empty_state(phone.as_deref(), "No phone number"),
        PropertyValue::Formula(formula) => render_formula(formula),
        PropertyValue::Relation(pages) => format!("Related items: {}", pages.len()),
        PropertyValue::People(people) => join(people.iter().map(User::display_name)),
        PropertyValue::Files(files) => format!("Files: {}", files.len()),
        PropertyValue::CreatedTime(time) | PropertyValue::LastEditedTime(time) => time.clone(),
        PropertyValue::CreatedBy(user) | PropertyValue::LastEditedBy(user) => {
            user.display_name().to_owned()
        }
        PropertyValue::Unsupported(tag) => {
            format!("{tag} type (value extraction not possible)")
        }
    }
}

fn render_formula(formula: &Formula) -> String {
    match formula {
        Formula::String(text) => text.clone().unwrap_or_else(|| NO_VALUE.to_owned()),
        Formula::Number(number) => number.map_or_else(|| NO_VALUE.to_owned(), format_number),
        Formula::Boolean(flag) => flag.map_or_else(|| NO_VALUE.to_owned(), |b| b.to_string()),
        Formula::Date(date) => date
            .as_ref()
            .map_or_else(|| "No date".to_owned(), format_date),
        Formula::Other(_) => FORMULA_PLACEHOLDER.to_owned(),
    }
}

/// `start ~ end`, with an empty end for single dates.
fn format_date(date: &DateValue) -> String {
    format!("{} ~ {}", date.start, date.end.as_deref().unwrap_or_default())
}

/// Integers print without a fractional part (`3`, not `3.0`).
fn format_number(number: f64) -> String {
    number.to_string()
}

fn or_empty_state(value: Option<&str>, empty: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => empty.to_owned(),
    }
}

fn join<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::{FileRef, PageRef, RichText, SelectOption};

    fn option(name: &str) -> SelectOption {
        SelectOption {
            name: name.to_owned(),
            ..Default::default()
        }
    }

    fn user(id: &str, name: Option<&str>) -> User {
        User {
            id: id.to_owned(),
            name: name.map(str::to_owned),
        }
    }

    #[test]
    fn test_title_and_rich_text_concatenate_runs() {
        let runs = vec![RichText::plain("Daily "), RichText::plain("log")];
        assert_eq!(render_property(&PropertyValue::Title(runs.clone())), "Daily log");
        assert_eq!(render_property(&PropertyValue::RichText(runs)), "Daily log");
    }

    #[test]
    fn test_number() {
        assert_eq!(render_property(&PropertyValue::Number(Some(3.0))), "3");
        assert_eq!(render_property(&PropertyValue::Number(Some(2.5))), "2.5");
        assert_eq!(render_property(&PropertyValue::Number(None)), "No value");
    }

    #[test]
    fn test_select_absent_uses_empty_state() {
        assert_eq!(
            render_property(&PropertyValue::Select(Some(option("Done")))),
            "Done"
        );
        assert_eq!(render_property(&PropertyValue::Select(None)), "No selection");
    }

    #[test]
    fn test_multi_select_joined() {
        let value = PropertyValue::MultiSelect(vec![option("A"), option("B")]);
        assert_eq!(render_property(&value), "A, B");
        assert_eq!(render_property(&PropertyValue::MultiSelect(vec![])), "");
    }

    #[test]
    fn test_date() {
        let single = DateValue {
            start: "2025-03-01".to_owned(),
            ..Default::default()
        };
        let range = DateValue {
            start: "2025-03-01".to_owned(),
            end: Some("2025-03-05".to_owned()),
            time_zone: None,
        };
        assert_eq!(
            render_property(&PropertyValue::Date(Some(single))),
            "2025-03-01 ~ "
        );
        assert_eq!(
            render_property(&PropertyValue::Date(Some(range))),
            "2025-03-01 ~ 2025-03-05"
        );
        assert_eq!(render_property(&PropertyValue::Date(None)), "No date");
    }

    #[test]
    fn test_checkbox_yes_no() {
        assert_eq!(render_property(&PropertyValue::Checkbox(true)), "Yes");
        assert_eq!(render_property(&PropertyValue::Checkbox(false)), "No");
    }

    #[test]
    fn test_contact_fields_empty_states() {
        assert_eq!(render_property(&PropertyValue::Url(None)), "No link");
        assert_eq!(render_property(&PropertyValue::Email(None)), "No email");
        assert_eq!(
            render_property(&PropertyValue::PhoneNumber(None)),
            "No phone number"
        );
        assert_eq!(
            render_property(&PropertyValue::Email(Some("a@b.c".to_owned()))),
            "a@b.c"
        );
    }

    #[test]
    fn test_formula_dispatches_on_result_type() {
        let render = |f: Formula| render_property(&PropertyValue::Formula(f));
        assert_eq!(render(Formula::String(Some("hi".to_owned()))), "hi");
        assert_eq!(render(Formula::Number(Some(42.0))), "42");
        assert_eq!(render(Formula::Boolean(Some(true))), "true");
        assert_eq!(
            render(Formula::Date(Some(DateValue {
                start: "2025-01-01".to_owned(),
                ..Default::default()
            }))),
            "2025-01-01 ~ "
        );
        assert_eq!(render(Formula::Other("array".to_owned())), "Formula value");
        assert_eq!(render(Formula::String(None)), "No value");
    }

    #[test]
    fn test_formula_empty_string_is_kept() {
        let value = PropertyValue::Formula(Formula::String(Some(String::new())));
        assert_eq!(render_property(&value), "");
    }

    #[test]
    fn test_relation_and_files_render_counts() {
        let relation = PropertyValue::Relation(vec![PageRef::default(), PageRef::default()]);
        let files = PropertyValue::Files(vec![FileRef::default()]);
        assert_eq!(render_property(&relation), "Related items: 2");
        assert_eq!(render_property(&files), "Files: 1");
    }

    #[test]
    fn test_people_use_name_or_id() {
        let value = PropertyValue::People(vec![user("u1", Some("Ada")), user("u2", None)]);
        assert_eq!(render_property(&value), "Ada, u2");
    }

    #[test]
    fn test_created_and_edited_fields() {
        assert_eq!(
            render_property(&PropertyValue::CreatedTime(
                "2025-01-01T00:00:00.000Z".to_owned()
            )),
            "2025-01-01T00:00:00.000Z"
        );
        assert_eq!(
            render_property(&PropertyValue::LastEditedBy(user("u7", None))),
            "u7"
        );
        assert_eq!(
            render_property(&PropertyValue::CreatedBy(user("u7", Some("Grace")))),
            "Grace"
        );
    }

    #[test]
    fn test_unknown_type_fallback() {
        let value = PropertyValue::Unsupported("rollup".to_owned());
        assert_eq!(
            render_property(&value),
            "rollup type (value extraction not possible)"
        );
    }
}
