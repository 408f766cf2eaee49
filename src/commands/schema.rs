//! Schema command implementation

use crate::catalog::OptionCatalog;
use crate::error::Result;
use crate::schema::ProfileSchema;

/// Print the JSON Schema of profile documents for this catalog
pub fn run(catalog: &OptionCatalog) -> Result<()> {
    let schema = ProfileSchema::new(catalog).to_json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
