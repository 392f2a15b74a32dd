use super::*;

use content::TitreRef;

fn title(id: Option<&str>, name: &str, ordre: Option<i64>) -> Title {
    Title { id: id.map(str::to_owned), name: name.to_owned(), description: String::new(), ordre }
}

// =============================================================================
// title_options
// =============================================================================

#[test]
fn title_options_follow_ordre_with_unordered_last() {
    let titles = vec![
        title(Some("a"), "Membre", None),
        title(Some("b"), "Tresorier", Some(3)),
        title(Some("c"), "President", Some(1)),
    ];
    let labels: Vec<String> = title_options(&titles).into_iter().map(|(_, label)| label).collect();
    assert_eq!(labels, vec!["President", "Tresorier", "Membre"]);
}

#[test]
fn title_options_skip_titles_without_id() {
    let titles = vec![title(None, "Draft", Some(1)), title(Some("x"), "Secretaire", Some(2))];
    assert_eq!(title_options(&titles), vec![("x".to_owned(), "Secretaire".to_owned())]);
}

#[test]
fn title_options_label_blank_names_by_id() {
    let titles = vec![title(Some("42"), "  ", Some(1))];
    assert_eq!(title_options(&titles), vec![("42".to_owned(), "ID Titre: 42".to_owned())]);
}

// =============================================================================
// titre_cells
// =============================================================================

#[test]
fn titre_cells_show_joined_name_and_ordre() {
    let comitard = Comitard {
        titre: Some(TitreRef { name: "Vice-President".into(), ordre: Some(2) }),
        ..Comitard::default()
    };
    assert_eq!(titre_cells(&comitard), ("Vice-President".to_owned(), "2".to_owned()));
}

#[test]
fn titre_cells_dash_when_missing() {
    assert_eq!(titre_cells(&Comitard::default()), ("-".to_owned(), "-".to_owned()));
    let unordered = Comitard { titre: Some(TitreRef { name: String::new(), ordre: None }), ..Comitard::default() };
    assert_eq!(titre_cells(&unordered), ("-".to_owned(), "-".to_owned()));
}
