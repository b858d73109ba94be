mod common;

use std::path::{Path, PathBuf};

use common::{Cell, TestWorkspace, raw_table};
use sim_import::{
    ImportSession, Provider, SimImportError,
    shell::{Outcome, Shell, run_export, run_import},
};

#[derive(Default)]
struct ScriptedShell {
    provider: Option<Provider>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    successes: Vec<String>,
    errors: Vec<String>,
    prompted_for_output: bool,
}

impl Shell for ScriptedShell {
    fn current_provider(&self) -> Option<Provider> {
        self.provider
    }

    fn select_input_file(&mut self, _provider: Provider) -> Option<PathBuf> {
        self.input.clone()
    }

    fn select_output_path(&mut self) -> Option<PathBuf> {
        self.prompted_for_output = true;
        self.output.clone()
    }

    fn report_success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }

    fn report_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

fn vodacom_workbook(workspace: &TestWorkspace) -> PathBuf {
    workspace.write_xlsx(
        "vodacom.xlsx",
        &["Cell No", "SIM Number", "IP Address"],
        &[
            vec![
                Cell::Text("0821112222"),
                Cell::Text("8910000000001"),
                Cell::Text("10.0.0.5"),
            ],
            vec![
                Cell::Number(27823334444.0),
                Cell::Text("8910000000002"),
                Cell::Text("10.0.0.6"),
            ],
        ],
    )
}

#[test]
fn import_then_export_through_shell() {
    let workspace = TestWorkspace::new();
    let output = workspace.path().join("export.csv");
    let mut shell = ScriptedShell {
        provider: Some(Provider::Vodacom),
        input: Some(vodacom_workbook(&workspace)),
        output: Some(output.clone()),
        ..Default::default()
    };
    let mut session = ImportSession::new();

    let imported = run_import(&mut shell, &mut session);
    assert!(imported.is_completed());
    assert_eq!(
        shell.successes,
        vec!["Vodacom Sim's imported successfully!\n2 SIMs (1 IP cols).".to_string()]
    );

    match run_export(&mut shell, &session) {
        Outcome::Completed(rows) => assert_eq!(rows, 2),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert!(shell.successes[1].starts_with("File exported successfully!\n\n2 SIM cards exported to"));
    assert!(shell.errors.is_empty());

    let csv = std::fs::read_to_string(&output).expect("read export");
    assert_eq!(
        csv,
        "Count,Cell Number,Sim Number,Ip Address1\n\
         1,270821112222,8910000000001,10.0.0.5\n\
         2,27823334444,8910000000002,10.0.0.6\n"
    );
}

#[test]
fn import_without_provider_reports_provider_not_selected() {
    let mut shell = ScriptedShell::default();
    let mut session = ImportSession::new();

    let outcome = run_import(&mut shell, &mut session);
    assert!(matches!(
        outcome,
        Outcome::Failed(SimImportError::ProviderNotSelected)
    ));
    assert_eq!(
        shell.errors,
        vec!["Please select a provider (Vodacom or MTN) first".to_string()]
    );
}

#[test]
fn cancelled_input_selection_reports_nothing() {
    let mut shell = ScriptedShell {
        provider: Some(Provider::Mtn),
        ..Default::default()
    };
    let mut session = ImportSession::new();

    assert!(matches!(
        run_import(&mut shell, &mut session),
        Outcome::Cancelled
    ));
    assert!(shell.successes.is_empty());
    assert!(shell.errors.is_empty());
}

#[test]
fn export_before_import_reports_no_data_without_prompting() {
    let mut shell = ScriptedShell::default();
    let session = ImportSession::new();

    assert!(matches!(
        run_export(&mut shell, &session),
        Outcome::Failed(SimImportError::NoData)
    ));
    assert!(!shell.prompted_for_output);
    assert_eq!(
        shell.errors,
        vec!["No data available. Please import Sim's first.".to_string()]
    );
}

#[test]
fn failed_import_keeps_previous_table() {
    let mut session = ImportSession::new();
    let good = raw_table(&["Cell No", "Sim No", "IP"], &[&["0820000001", "8901", "10.0.0.1"]]);
    session
        .import_table(Some(Provider::Vodacom), &good)
        .expect("first import");
    let before = session.export_to_string().expect("export");

    let bad = raw_table(&["Cell No", "IP"], &[&["0820000009", "10.0.0.9"]]);
    let err = session
        .import_table(Some(Provider::Vodacom), &bad)
        .unwrap_err();
    assert!(matches!(err, SimImportError::MissingColumns(_)));

    assert_eq!(session.current_provider(), Some(Provider::Vodacom));
    assert_eq!(session.export_to_string().expect("export"), before);
}

#[test]
fn successful_import_replaces_previous_table() {
    let mut session = ImportSession::new();
    let vodacom = raw_table(&["Cell No", "Sim No", "IP"], &[&["0820000001", "8901", "10.0.0.1"]]);
    let mtn = raw_table(
        &["MSISDN", "ICCID", "CN", "NL"],
        &[&["0830000001", "8902", "10.1.0.1", "10.2.0.1"]],
    );
    session
        .import_table(Some(Provider::Vodacom), &vodacom)
        .expect("vodacom");
    let summary = session.import_table(Some(Provider::Mtn), &mtn).expect("mtn");

    assert_eq!(summary.ip_columns, 2);
    assert_eq!(session.current_provider(), Some(Provider::Mtn));
    let export = session.export_table().expect("export");
    assert_eq!(export.headers.last().map(String::as_str), Some("Ip Address2"));
}

#[test]
fn empty_import_cannot_be_exported() {
    let mut session = ImportSession::new();
    let empty = raw_table(&["Cell No", "Sim No", "IP"], &[]);
    let summary = session
        .import_table(Some(Provider::Vodacom), &empty)
        .expect("import");
    assert_eq!(summary.rows, 0);
    assert!(matches!(session.export_table(), Err(SimImportError::NoData)));
}

#[test]
fn unreadable_file_is_unexpected_failure() {
    let workspace = TestWorkspace::new();
    let corrupt = workspace.write("broken.xlsx", "this is not a zip archive");
    let mut session = ImportSession::new();

    let err = session
        .import_path(Some(Provider::Vodacom), &corrupt)
        .unwrap_err();
    assert!(matches!(err, SimImportError::Unexpected(_)));
    assert!(err.to_string().starts_with("An error occurred: Opening workbook"));
    assert!(session.current().is_none());

    let missing = session
        .import_path(Some(Provider::Vodacom), Path::new("/nonexistent/sims.xlsx"))
        .unwrap_err();
    assert!(matches!(missing, SimImportError::Unexpected(_)));
}
