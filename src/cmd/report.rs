use clap::Args;
use peertally::api;
use peertally::config::OutputParams;
use peertally::report;
use peertally::TallyResult;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Survey export (xlsx, xlsm, xls, xlsb, ods or csv)
    pub file: PathBuf,

    #[command(flatten)]
    pub output: OutputParams,
}

pub fn run(args: ReportArgs) -> TallyResult<()> {
    let summary = api::process_file(&args.file)?;
    let rendered = report::render(&summary, args.output.format)?;

    match &args.output.output {
        Some(path) => {
            fs::write(path, &rendered)?;
            info!("📝 Wrote {} report to {}", args.output.format, path.display());
        }
        None => println!("{}", rendered),
    }

    info!("✅ Successfully processed: {}", args.file.display());
    Ok(())
}
