use lugat_types::{ActionLabel, RenderInstruction, RenderedEntry, Suggestion};

use crate::ui::{Command, TerminalView};

fn suggestion(word: &str) -> Suggestion {
    Suggestion {
        word: word.to_string(),
        html: word.to_string(),
    }
}

#[test]
fn test_command_parsing() {
    assert_eq!(Command::parse("tre"), Command::Type("tre".into()));
    assert_eq!(Command::parse(""), Command::Type(String::new()));
    assert_eq!(Command::parse(":enter"), Command::Enter);
    assert_eq!(Command::parse(":click"), Command::Click);
    assert_eq!(Command::parse(":pick 2"), Command::Pick(2));
    assert_eq!(Command::parse(":pick 0"), Command::Unknown(":pick 0".into()));
    assert_eq!(Command::parse(":q"), Command::Quit);
    assert_eq!(Command::parse(":dance"), Command::Unknown(":dance".into()));
}

#[test]
fn test_view_tracks_suggestions_and_label() {
    let mut view = TerminalView::default();
    let mut out = Vec::new();

    view.apply_all(
        vec![
            RenderInstruction::ShowSuggestions(vec![suggestion("street"), suggestion("tree")]),
            RenderInstruction::SetActionLabel(ActionLabel::Search),
        ],
        &mut out,
    )
    .unwrap();

    assert_eq!(view.suggestions.len(), 2);
    assert_eq!(view.label, ActionLabel::Search);
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("1. street"));
    assert!(printed.contains("2. tree"));

    view.apply(RenderInstruction::HideSuggestions, &mut Vec::<u8>::new())
        .unwrap();
    assert!(view.suggestions.is_empty());
}

#[test]
fn test_view_prints_entry() {
    let mut view = TerminalView::default();
    let mut out = Vec::new();

    view.apply(
        RenderInstruction::ShowEntry(RenderedEntry {
            word: "tree".into(),
            kind: "noun".into(),
            origin: "Old English".into(),
            description_html: "A tall plant.".into(),
            html: String::new(),
        }),
        &mut out,
    )
    .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "tree (noun)\nOrigin: Old English\nI. A tall plant.\n"
    );
}
