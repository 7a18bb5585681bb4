use assert_fs::prelude::*;
use predicates::prelude::*;

const PROFILE_WITH_CONTACT: &str = "annual_revenue_millions: 20
opex_percent_of_revenue: 35
tech_spend_percent_of_opex: 8
ai_readiness: learning
process_maturity_percent: 60
outsourcing_level: medium
headcount: 85
contact:
  name: Dana Lee
  company: Acme
  email: dana@acme.test
";

#[test]
fn report_writes_analysis_text() {
    let temp = assert_fs::TempDir::new().unwrap();
    let profile = temp.child("profile.yaml");
    profile.write_str(PROFILE_WITH_CONTACT).unwrap();
    let report = temp.child("report.txt");

    let mut cmd = assert_cmd::cargo_bin_cmd!("costsim");
    cmd.args([
        "report",
        "-i",
        profile.path().to_str().unwrap(),
        "-o",
        report.path().to_str().unwrap(),
        "--seed",
        "3",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Analysis report for Acme written to"));

    report.assert(predicate::str::contains("Small Business Cost-Saving Analysis Report"));
    report.assert(predicate::str::contains("Company: Acme"));
    report.assert(predicate::str::contains("- AI/Automation Readiness: learning"));
    report.assert(predicate::str::contains("Most Likely (P50):"));
}

#[test]
fn report_defaults_file_name_to_company() {
    let temp = assert_fs::TempDir::new().unwrap();
    let profile = temp.child("profile.yaml");
    profile.write_str(PROFILE_WITH_CONTACT).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("costsim");
    cmd.current_dir(temp.path());
    cmd.args(["report", "-i", "profile.yaml", "-n", "100"]);

    cmd.assert().success();
    temp.child("Acme_cost_savings_analysis.txt")
        .assert(predicate::path::exists());
}

#[test]
fn report_requires_contact() {
    let temp = assert_fs::TempDir::new().unwrap();
    let profile = temp.child("profile.yaml");
    let without_contact = PROFILE_WITH_CONTACT
        .split("contact:")
        .next()
        .unwrap()
        .to_string();
    profile.write_str(&without_contact).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("costsim");
    cmd.current_dir(temp.path());
    cmd.args(["report", "-i", "profile.yaml"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("name, company and email are required"));
}
