pub mod json;
pub mod md;

use crate::error::ReadinessError;
use crate::results::ResultsView;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(view: &ResultsView, format: OutputFormat) -> Result<String, ReadinessError> {
    match format {
        OutputFormat::Json => json::to_json(view).map_err(ReadinessError::Json),
        OutputFormat::Md => Ok(md::to_markdown(view)),
    }
}
