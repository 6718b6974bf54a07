use seqcalc::calculators::{MaxProfit, TrimmedMean};
use seqcalc::error::InputError;
use seqcalc::output::{OutputFormat, ReportWriter};
use seqcalc::runner::{RunSummary, run};

fn run_text<C: seqcalc::calculators::Calculator>(calculator: &C, input: &str) -> (RunSummary, String) {
    let mut out = ReportWriter::new(OutputFormat::Text, Vec::new());
    let summary = run(calculator, input.as_bytes(), &mut out).expect("run failed");
    let text = String::from_utf8(out.into_inner().unwrap()).unwrap();
    (summary, text)
}

#[test]
fn test_trimmed_mean_fixture() {
    let input = include_str!("fixtures/trimmed_mean.txt");
    let (summary, text) = run_text(&TrimmedMean, input);

    assert_eq!(summary, RunSummary { cases: 5, failed: 3 });
    assert_eq!(
        text.lines().collect::<Vec<_>>(),
        vec![
            "3.00",
            "Error: No numbers left after removal",
            "Error: No numbers left after removal",
            "Error: No numbers left after removal",
            "6.75",
        ]
    );
}

#[test]
fn test_max_profit_fixture() {
    let input = include_str!("fixtures/max_profit.txt");
    let (summary, text) = run_text(&MaxProfit, input);

    assert_eq!(summary, RunSummary { cases: 4, failed: 0 });
    assert_eq!(text, "5\n0\n0\n11\n");
}

#[test]
fn test_csv_output() {
    let mut out = ReportWriter::new(OutputFormat::Csv, Vec::new());
    run(&MaxProfit, "2 3 9\n".as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out.into_inner().unwrap()).unwrap();

    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines, vec!["case,count,result,error", "1,2,6,"]);
}

#[test]
fn test_json_output_for_no_data() {
    let mut out = ReportWriter::new(OutputFormat::Json, Vec::new());
    run(&TrimmedMean, "3 5 5 5\n".as_bytes(), &mut out).unwrap();
    let text = String::from_utf8(out.into_inner().unwrap()).unwrap();

    let record: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(record["case"], 1);
    assert_eq!(record["count"], 3);
    assert!(record["result"].is_null());
    assert_eq!(record["error"], "No numbers left after removal");
}

#[test]
fn test_malformed_token_aborts_after_earlier_output() {
    let mut out = ReportWriter::new(OutputFormat::Text, Vec::new());
    let err = run(&TrimmedMean, "3 1 2 3\n4 1 2 three 4\n".as_bytes(), &mut out).unwrap_err();

    match err.downcast_ref::<InputError>() {
        Some(InputError::Malformed { token, .. }) => assert_eq!(token, "three"),
        other => panic!("unexpected error: {:?}", other),
    }
    let text = String::from_utf8(out.into_inner().unwrap()).unwrap();
    assert_eq!(text, "2.00\n");
}
