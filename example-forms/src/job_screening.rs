use anyhow::Context;
use branchform_types::Form;

/// The job screening form as a JSON document.
///
/// `role` carries a question-level `"end"` rule, so until it is answered only
/// `role` is visible. Paths once answered:
/// - "Engineering": `role`, `languages`, `skills`, `start_date`, `cv`
/// - "Sales": `role`, `quota`, `start_date`, `cv`
/// - "Other": `role`, `other_role`, `start_date`, `cv`
pub const JOB_SCREENING_JSON: &str = include_str!("../forms/job_screening.json");

/// Load the bundled job screening form.
pub fn job_screening() -> anyhow::Result<Form> {
    Form::from_json(JOB_SCREENING_JSON).context("bundled job screening form is invalid")
}
