//! Options command implementation
//!
//! Lists catalog definitions in declaration order.

use console::Style;

use crate::catalog::{OptionCatalog, OptionDefinition};
use crate::cli::OptionsArgs;
use crate::error::Result;

/// Run options command
pub fn run(catalog: &OptionCatalog, args: OptionsArgs) -> Result<()> {
    let definitions = select(catalog, args.category.as_deref());
    if definitions.is_empty() {
        println!("No options found.");
        return Ok(());
    }

    let width = definitions.iter().map(|d| d.name.len()).max().unwrap_or(0);
    println!(
        "{}",
        Style::new().bold().apply_to(format!(
            "{:<width$}  {:<14}  {:<7}  {:<8}  {}",
            "NAME", "CATEGORY", "DEFAULT", "KIND", "CAN DISABLE"
        ))
    );
    for def in definitions {
        println!("{}", format_row(def, width));
    }
    Ok(())
}

fn select<'a>(catalog: &'a OptionCatalog, category: Option<&str>) -> Vec<&'a OptionDefinition> {
    catalog
        .definitions()
        .iter()
        .filter(|def| category.is_none_or(|c| def.category() == c))
        .collect()
}

fn format_row(def: &OptionDefinition, width: usize) -> String {
    let default = if def.default { "on" } else { "off" };
    let can_disable = if def.can_be_disabled { "yes" } else { "no" };
    let name = format!("{:<width$}", def.name);
    let name = if def.defines_category() {
        Style::new().yellow().apply_to(name).to_string()
    } else {
        name
    };
    format!(
        "{name}  {:<14}  {default:<7}  {:<8}  {can_disable}",
        def.category(),
        def.value_kind.to_string(),
    )
}
