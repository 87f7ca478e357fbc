//! Starter content shown on first launch.

use crate::{Board, Card, Label, List, ListTone};

/// The default label palette.
pub fn default_labels() -> Vec<Label> {
    vec![
        Label::with_id("label-urgent", "Urgent", "retro-red-deep"),
        Label::with_id("label-high", "High Priority", "retro-orange-deep"),
        Label::with_id("label-medium", "Medium", "retro-yellow-deep"),
        Label::with_id("label-low", "Low", "retro-green-deep"),
        Label::with_id("label-bug", "Bug", "retro-red"),
        Label::with_id("label-feature", "Feature", "retro-blue"),
        Label::with_id("label-design", "Design", "retro-purple"),
        Label::with_id("label-devops", "DevOps", "retro-pink"),
    ]
}

fn seed_card(id: &str, title: &str, content: Option<&str>, labels: Vec<Label>) -> Card {
    Card {
        id: id.to_string(),
        title: title.to_string(),
        content: content.map(str::to_string),
        labels,
        due_date: None,
        priority: None,
    }
}

fn seed_list(id: &str, title: &str, tone: ListTone, cards: Vec<Card>) -> List {
    List {
        id: id.to_string(),
        title: title.to_string(),
        tone: Some(tone),
        cards,
        labels: Vec::new(),
    }
}

/// Board used when nothing has been persisted yet.
pub fn initial_board() -> Board {
    let labels = default_labels();
    let pick = |id: &str| labels.iter().filter(|label| label.id == id).cloned().collect::<Vec<_>>();

    let todo = seed_list(
        "list-1",
        "To Do",
        ListTone::Blue,
        vec![
            seed_card(
                "card-1",
                "Set up the project",
                Some("Create the workspace layout and CI"),
                [pick("label-urgent"), pick("label-feature")].concat(),
            ),
            seed_card(
                "card-2",
                "Define the data model",
                Some("Board, List, Card and Label types"),
                pick("label-devops"),
            ),
        ],
    );
    let doing = seed_list(
        "list-2",
        "In Progress",
        ListTone::Orange,
        vec![seed_card(
            "card-3",
            "Render the board",
            Some("Show lists and cards from the seed data"),
            pick("label-high"),
        )],
    );
    let done = seed_list(
        "list-3",
        "Done",
        ListTone::Green,
        vec![
            seed_card("card-4", "Create the repository", None, Vec::new()),
            seed_card("card-5", "Initial commit", None, Vec::new()),
        ],
    );

    Board {
        id: "board-1".to_string(),
        title: "Kanban Board".to_string(),
        lists: vec![todo, doing, done],
        available_labels: labels,
    }
}
