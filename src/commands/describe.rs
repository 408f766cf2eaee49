//! Profile describe command implementation

use console::Style;

use crate::catalog::OptionCatalog;
use crate::cli::DescribeArgs;
use crate::error::Result;
use crate::plan::ExecutionPlan;
use crate::profile::Profile;

/// Run profile describe command
pub fn run(catalog: &OptionCatalog, studio: &str, args: DescribeArgs) -> Result<()> {
    let profile = Profile::load(catalog, &args.file)?;
    let plan = ExecutionPlan::new(&profile, args.bsp_path, None);

    println!(
        "{} {}",
        Style::new().bold().yellow().apply_to("Profile:"),
        args.file.display()
    );
    println!();
    print!("{}", plan.describe_profile());
    println!();
    println!("{}", Style::new().bold().apply_to("Commands:"));
    for command in plan.show_commands(studio) {
        println!("  {command}");
    }
    Ok(())
}
