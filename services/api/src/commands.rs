use clap::{Args, ValueEnum};
use ecrp::appraisal::{
    to_csv_string, write_csv, AnswerLevel, AnswerSheetImporter, AppraisalReport, Outcome,
    OutcomeEvaluator, Question, CATALOG, OVERALL_KEY,
};
use ecrp::config::AppConfig;
use ecrp::error::AppError;
use ecrp::telemetry;
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Answer sheet to evaluate (.csv rows or a JSON document)
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    /// Report JSON previously produced by `evaluate --format json` or the API
    #[arg(long)]
    pub(crate) report: PathBuf,
    /// Write the CSV here instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let EvaluateArgs { answers, format } = args;

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let sheet = AnswerSheetImporter::from_path(&answers)?;
    let report = OutcomeEvaluator::new().evaluate(&sheet);

    match format {
        OutputFormat::Text => print!("{}", render_report(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Csv => print!("{}", to_csv_string(&report)?),
    }

    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let ExportArgs { report, output } = args;

    let raw = std::fs::read_to_string(&report)?;
    let report = AppraisalReport::from_json_str(&raw)?;

    match output {
        Some(path) => {
            let file = std::fs::File::create(&path)?;
            write_csv(&report, file)?;
            println!("Wrote CSV export to {}", path.display());
        }
        None => print!("{}", to_csv_string(&report)?),
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&CATALOG)?);
    } else {
        print!("{}", render_catalog());
    }
    Ok(())
}

fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Blank => "blank",
        other => other.label(),
    }
}

pub(crate) fn render_report(report: &AppraisalReport) -> String {
    let mut out = String::from("ECR-P appraisal\n");

    for (domain, result) in report.domains() {
        out.push_str(&format!("\n{}\n", domain.label()));
        out.push_str(&format!(
            "- Study level: {}\n",
            outcome_text(result.study_level)
        ));
        out.push_str(&format!(
            "- Policy recommendations: {}\n",
            outcome_text(result.policy_level)
        ));
        out.push_str(&format!(
            "- Domain outcome: {}\n",
            outcome_text(result.domain_outcome)
        ));
    }

    out.push_str(&format!(
        "\n{}: {}\n",
        OVERALL_KEY,
        outcome_text(report.overall_outcome())
    ));
    out
}

fn render_questions(out: &mut String, level: AnswerLevel, questions: &[Question]) {
    out.push_str(&format!("{}\n", level.label()));
    for question in questions {
        match question.depends_on {
            Some(parent) => out.push_str(&format!(
                "  {} {} (asked when {} is yes)\n",
                question.id, question.text, parent
            )),
            None => out.push_str(&format!("  {} {}\n", question.id, question.text)),
        }
    }
}

pub(crate) fn render_catalog() -> String {
    let mut out = format!(
        "ECR-P question catalog\nAnswer options: {}\n",
        CATALOG.answer_options.join(", ")
    );

    for entry in &CATALOG.domains {
        out.push_str(&format!("\n{}\n", entry.domain.label()));
        render_questions(&mut out, AnswerLevel::Study, entry.study_level);
        render_questions(&mut out, AnswerLevel::Policy, entry.policy_level);
    }
    out
}
