use chrono::Utc;
use clap::{Args, ValueEnum};
use compliance_kit::error::AppError;
use compliance_kit::workflows::compliance::{
    build_package, questionnaire_from, score, Answer, Locale, PackageError,
    PersonalDataExposure, RiskAssessment,
};
use serde_json::{Map, Value};
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Questionnaire JSON file using the same fields as the generate endpoint
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Directory the archive is written to
    #[arg(long, default_value = ".")]
    pub(crate) output_dir: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    #[arg(long, value_enum, default_value_t = PersonalDataArg::No)]
    pub(crate) personal_data: PersonalDataArg,
    #[arg(long, value_enum, default_value_t = AnswerArg::No)]
    pub(crate) external_use: AnswerArg,
    #[arg(long, value_enum, default_value_t = AnswerArg::No)]
    pub(crate) automated_decisions: AnswerArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum PersonalDataArg {
    No,
    Limited,
    Regular,
}

impl From<PersonalDataArg> for PersonalDataExposure {
    fn from(value: PersonalDataArg) -> Self {
        match value {
            PersonalDataArg::No => Self::No,
            PersonalDataArg::Limited => Self::Limited,
            PersonalDataArg::Regular => Self::Regular,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum AnswerArg {
    Yes,
    No,
}

impl From<AnswerArg> for Answer {
    fn from(value: AnswerArg) -> Self {
        match value {
            AnswerArg::Yes => Self::Yes,
            AnswerArg::No => Self::No,
        }
    }
}

pub(crate) fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let raw = fs::read_to_string(&args.input)?;
    let payload = match serde_json::from_str::<Value>(&raw)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let questionnaire = questionnaire_from(&payload).map_err(PackageError::from)?;
    let package = build_package(&questionnaire, Utc::now())?;

    fs::create_dir_all(&args.output_dir)?;
    let path = args.output_dir.join(&package.archive.file_name);
    fs::write(&path, &package.archive.bytes)?;

    println!("Compliance package for {}", questionnaire.company);
    print_assessment(&package.assessment);
    println!(
        "Documents: {} text, {} register rows",
        package.composed.documents.len(),
        package.composed.register.rows.len()
    );
    println!("Archive written to {}", path.display());
    Ok(())
}

pub(crate) fn run_score(args: ScoreArgs) {
    let assessment = score(
        args.personal_data.into(),
        args.external_use.into(),
        args.automated_decisions.into(),
    );
    print_assessment(&assessment);
}

fn print_assessment(assessment: &RiskAssessment) {
    println!("Risk: {}", assessment.summary(Locale::En));
    println!("Recommended actions");
    for action in assessment.action_texts(Locale::En) {
        println!("- {action}");
    }
}
