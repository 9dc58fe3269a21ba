use clap::Args;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use peertally::api;
use peertally::column::index_to_column;
use peertally::TallyResult;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Survey export (xlsx, xlsm, xls, xlsb, ods or csv)
    pub file: PathBuf,
}

pub fn run(args: InspectArgs) -> TallyResult<()> {
    let classification = api::inspect_file(&args.file)?;

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Col").add_attribute(Attribute::Bold),
        Cell::new("Index"),
        Cell::new("Section"),
        Cell::new("Question"),
    ]);

    for (&col, entry) in &classification.layout {
        table.add_row(vec![
            Cell::new(index_to_column(col)).add_attribute(Attribute::Bold),
            Cell::new(col).set_alignment(CellAlignment::Right),
            Cell::new(entry.kind),
            Cell::new(&entry.question),
        ]);
    }

    println!("{}", table);
    Ok(())
}
