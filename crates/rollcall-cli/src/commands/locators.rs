use anyhow::Result;
use rollcall_core::Locators;

/// Print the default locator set as pretty JSON.
///
/// The output is a valid input for `extract --locators`, so the workflow for
/// a changed page is: dump, edit the broken selectors, re-run.
pub fn execute() -> Result<()> {
    let locators = Locators::default();
    println!("{}", serde_json::to_string_pretty(&locators)?);
    Ok(())
}
