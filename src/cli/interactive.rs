//! Prompt-driven search: pick filters in cascade order, then page through the
//! results.

use std::fmt;

use anyhow::Result;
use dialoguer::{Input, Select};

use identicole::SearchSession;
use identicole::identicole_core::ClientError;
use identicole::identicole_models::{DEPARTMENTS, Modality};

use super::{print_outcome, print_results};

const ANY: &str = "(any)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    NextPage,
    PreviousPage,
    JumpToPage,
    NewSearch,
    Reset,
    Quit,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Action::NextPage => "Next page",
            Action::PreviousPage => "Previous page",
            Action::JumpToPage => "Go to page...",
            Action::NewSearch => "Change filters and search again",
            Action::Reset => "Reset filters",
            Action::Quit => "Quit",
        };
        f.write_str(label)
    }
}

pub async fn run(session: &SearchSession) -> Result<()> {
    println!("\n🏫 Identicole school search\n");
    report(session.start().await);

    loop {
        choose_filters(session).await?;

        match session.search().await {
            Ok(outcome) => {
                print_outcome(outcome);
                print_results(&session.snapshot());
            }
            Err(e) => eprintln!("\n❌ {}", e.user_message()),
        }

        match browse(session).await? {
            Action::Quit => break,
            Action::Reset => report(session.reset().await),
            _ => {}
        }
    }

    println!("\n👋 Goodbye");
    Ok(())
}

async fn choose_filters(session: &SearchSession) -> Result<()> {
    let state = session.snapshot();

    let items: Vec<String> = DEPARTMENTS
        .iter()
        .map(|d| format!("{}  {}", d.code, d.label))
        .collect();
    let current = state
        .selection
        .department
        .as_deref()
        .and_then(|code| DEPARTMENTS.iter().position(|d| d.code == code))
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt("Department")
        .items(&items)
        .default(current)
        .interact()?;
    let department = DEPARTMENTS[index].code;
    if state.selection.department.as_deref() != Some(department) || state.provinces.is_empty() {
        report(session.select_department(department).await);
    }

    let state = session.snapshot();
    if state.provinces.is_empty() {
        println!("⚠️  No provinces available for this department");
        return Ok(());
    }
    let items: Vec<String> = state.provinces.iter().map(|p| p.name.clone()).collect();
    let current = state
        .selection
        .province
        .as_deref()
        .and_then(|code| state.provinces.iter().position(|p| p.code == code))
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt("Province")
        .items(&items)
        .default(current)
        .interact()?;
    let province = &state.provinces[index].code;
    if state.selection.province.as_ref() != Some(province) || state.districts.is_empty() {
        report(session.select_province(province.clone()).await);
    }

    let state = session.snapshot();
    if state.districts.is_empty() {
        println!("⚠️  No districts available for this province");
        return Ok(());
    }
    let items: Vec<String> = state.districts.iter().map(|d| d.name.clone()).collect();
    let current = state
        .selection
        .district
        .as_deref()
        .and_then(|code| state.districts.iter().position(|d| d.code == code))
        .unwrap_or(0);
    let index = Select::new()
        .with_prompt("District")
        .items(&items)
        .default(current)
        .interact()?;
    session.select_district(state.districts[index].code.clone());

    let mut items = vec![ANY.to_string()];
    items.extend(Modality::ALL.iter().map(|m| m.label().to_string()));
    let current = state
        .selection
        .modality
        .and_then(|m| Modality::ALL.iter().position(|other| *other == m))
        .map_or(0, |position| position + 1);
    let index = Select::new()
        .with_prompt("Modality")
        .items(&items)
        .default(current)
        .interact()?;
    let modality = index.checked_sub(1).map(|position| Modality::ALL[position]);
    if modality != state.selection.modality {
        report(session.select_modality(modality).await);
    }

    let state = session.snapshot();
    if state.selection.modality.is_some() && !state.levels.is_empty() {
        let mut items = vec![ANY.to_string()];
        items.extend(state.levels.iter().map(|l| l.name.clone()));
        let current = state
            .selection
            .level
            .as_deref()
            .and_then(|code| state.levels.iter().position(|l| l.code == code))
            .map_or(0, |position| position + 1);
        let index = Select::new()
            .with_prompt("Level")
            .items(&items)
            .default(current)
            .interact()?;
        let level = index
            .checked_sub(1)
            .map(|position| state.levels[position].code.clone())
            .unwrap_or_default();
        session.select_level(level);
    }

    let query: String = Input::new()
        .with_prompt("School name (leave empty for any)")
        .with_initial_text(state.selection.query.clone())
        .allow_empty(true)
        .interact_text()?;
    if query.trim().is_empty() {
        session.clear_query();
    } else {
        session.set_query(query.trim());
    }

    Ok(())
}

/// Pages through the current results until the user asks for something that
/// ends browsing. Returns that action.
async fn browse(session: &SearchSession) -> Result<Action> {
    loop {
        let window = session.snapshot().window();

        let mut actions = Vec::new();
        if window.has_next() {
            actions.push(Action::NextPage);
        }
        if window.has_previous() {
            actions.push(Action::PreviousPage);
        }
        if window.total_pages() > 1 {
            actions.push(Action::JumpToPage);
        }
        actions.extend([Action::NewSearch, Action::Reset, Action::Quit]);

        let index = Select::new()
            .with_prompt("What next?")
            .items(&actions)
            .default(0)
            .interact()?;

        let result = match actions[index] {
            Action::NextPage => session.next_page().await,
            Action::PreviousPage => session.previous_page().await,
            Action::JumpToPage => {
                let total_pages = window.total_pages();
                let page: u32 = Input::new()
                    .with_prompt(format!("Page (1-{})", total_pages))
                    .validate_with(|page: &u32| -> Result<(), String> {
                        if (1..=total_pages).contains(page) {
                            Ok(())
                        } else {
                            Err(format!("Enter a page between 1 and {}", total_pages))
                        }
                    })
                    .interact_text()?;
                session.go_to_page(page - 1).await
            }
            action => return Ok(action),
        };

        match result {
            Ok(Some(outcome)) => {
                print_outcome(outcome);
                print_results(&session.snapshot());
            }
            Ok(None) => println!("⚠️  No such page"),
            Err(e) => eprintln!("\n❌ {}", e.user_message()),
        }
    }
}

fn report(result: Result<(), ClientError>) {
    if let Err(e) = result {
        eprintln!("❌ {}", e.user_message());
    }
}
