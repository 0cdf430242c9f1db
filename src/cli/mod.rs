//! Command handlers for the `identicole` binary.

pub mod interactive;

use anyhow::{Result, anyhow};
use serde::Serialize;

use identicole::identicole_client::LocationApi;
use identicole::identicole_models::{DEPARTMENTS, Modality, School};
use identicole::{SearchOutcome, SearchSession, SearchState};

use crate::SearchArgs;

pub fn print_departments() {
    println!("\n📍 Departments\n");
    for department in DEPARTMENTS.iter() {
        println!("  {}  {}", department.code, department.label);
    }
}

pub fn print_modalities() {
    println!("\n🎓 Modalities\n");
    for modality in Modality::ALL {
        println!("  {}  {}", modality.code(), modality.label());
    }
}

pub async fn handle_provinces(locations: &dyn LocationApi, department: &str) -> Result<()> {
    let provinces = locations.list_provinces(department).await?;

    println!("\n📍 Provinces of department {}\n", department);
    if provinces.is_empty() {
        println!("  (none)");
    }
    for province in provinces {
        println!("  {}  {}", province.code, province.name);
    }
    Ok(())
}

pub async fn handle_districts(
    locations: &dyn LocationApi,
    department: &str,
    province: &str,
) -> Result<()> {
    let districts = locations.list_districts(department, province).await?;

    println!("\n📍 Districts of province {}-{}\n", department, province);
    if districts.is_empty() {
        println!("  (none)");
    }
    for district in districts {
        println!("  {}  {}", district.code, district.name);
    }
    Ok(())
}

pub async fn handle_levels(locations: &dyn LocationApi, modality: &str) -> Result<()> {
    let modality = parse_modality(modality)?;
    let levels = locations.list_levels(modality).await?;

    println!("\n🎓 Levels of {}\n", modality);
    if levels.is_empty() {
        println!("  (none)");
    }
    for level in levels {
        println!("  {}  {}", level.code, level.name);
    }
    Ok(())
}

/// Applies the filters in cascade order, searches, then moves to the
/// requested page.
pub async fn handle_search(session: &SearchSession, args: SearchArgs) -> Result<()> {
    let modality = args.modality.as_deref().map(parse_modality).transpose()?;

    session.select_department(args.department).await?;
    if let Some(province) = args.province {
        if session.snapshot().selection.province.as_deref() != Some(province.as_str()) {
            session.select_province(province).await?;
        }
    }
    session.select_district(args.district);

    if modality.is_some() {
        session.select_modality(modality).await?;
    }
    if let Some(level) = args.level {
        session.select_level(level);
    }
    if let Some(query) = args.query {
        session.set_query(query);
    }

    session.search().await?;

    if args.page > 0 {
        let total_pages = session.total_pages();
        if session.go_to_page(args.page).await?.is_none() {
            return Err(anyhow!(
                "Page {} is out of range (the search has {} page(s))",
                args.page,
                total_pages
            ));
        }
    }

    let state = session.snapshot();
    if args.json {
        print_json(&state)?;
    } else {
        print_results(&state);
    }
    Ok(())
}

pub(crate) fn parse_modality(code: &str) -> Result<Modality> {
    Modality::from_code(code.trim())
        .ok_or_else(|| anyhow!("Unknown modality code '{}' (expected 01, 03 or 04)", code))
}

pub(crate) fn print_outcome(outcome: SearchOutcome) {
    if outcome == SearchOutcome::Superseded {
        println!("⚠️  Results were replaced by a newer search");
    }
}

pub(crate) fn print_results(state: &SearchState) {
    println!();
    for (index, school) in state.schools.iter().enumerate() {
        let position = state.window().offset() + index as u64 + 1;
        println!("{:>4}. {}", position, school.name);
        if let Some(details) = school_details(school) {
            println!("      {}", details);
        }
        if let Some(address) = &school.address {
            println!("      {}", address);
        }
    }

    if let Some(message) = &state.message {
        println!("\n✅ {}", message);
    }
    if state.total_pages() > 1 {
        println!("   Page {} of {}", state.page + 1, state.total_pages());
    }
}

fn school_details(school: &School) -> Option<String> {
    let parts: Vec<&str> = [
        school.level.as_deref(),
        school.management.as_deref(),
        school.shift.as_deref(),
        school.district.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageJson<'a> {
    total: u64,
    page: u32,
    page_size: u32,
    total_pages: u32,
    message: Option<&'a str>,
    resultados: &'a [School],
}

fn print_json(state: &SearchState) -> Result<()> {
    let page = PageJson {
        total: state.total,
        page: state.page,
        page_size: state.page_size,
        total_pages: state.total_pages(),
        message: state.message.as_deref(),
        resultados: &state.schools,
    };
    println!("{}", serde_json::to_string_pretty(&page)?);
    Ok(())
}
