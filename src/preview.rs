use anyhow::Result;
use log::info;

use crate::{cli::PreviewArgs, io_utils, session::ImportSession, table};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let mut session = ImportSession::new().with_input_encoding(encoding);
    session.import_path(args.provider, &args.input)?;

    let export = session.export_table()?;
    let rows = export
        .rows
        .iter()
        .take(args.rows)
        .cloned()
        .collect::<Vec<_>>();
    if let Some(table) = session.current() {
        let mapping = table
            .headers()
            .iter()
            .zip(table.source_headers())
            .map(|(canonical, source)| vec![canonical.clone(), source.clone()])
            .collect::<Vec<_>>();
        table::print_table(&["column".to_string(), "source".to_string()], &mapping);
        println!();
    }
    table::print_table(&export.headers, &rows);
    info!(
        "Displayed {} of {} row(s) from {:?}",
        rows.len(),
        export.row_count(),
        args.input
    );
    Ok(())
}
