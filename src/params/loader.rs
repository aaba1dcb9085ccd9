//! Load batches of projection scenarios from CSV

use std::path::Path;

use csv::Reader;

use super::data::ProjectionRequest;
use crate::error::Result;
use crate::rates::RateBasis;

/// Default scenario file used by the batch runner
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Initial")]
    initial: Option<f64>,
    #[serde(rename = "RatePercent")]
    rate_percent: Option<f64>,
    #[serde(rename = "RateBasis")]
    rate_basis: Option<String>,
    #[serde(rename = "Contribution")]
    contribution: Option<f64>,
    #[serde(rename = "Months")]
    months: Option<i64>,
}

impl CsvRow {
    fn to_request(self) -> Result<ProjectionRequest> {
        let rate_basis = match self.rate_basis.as_deref().map(str::trim) {
            None | Some("") => RateBasis::Monthly,
            Some(s) => s.parse()?,
        };

        Ok(ProjectionRequest {
            name: Some(self.name),
            initial: self.initial,
            rate_percent: self.rate_percent,
            rate_basis,
            contribution: self.contribution,
            months: self.months,
        })
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ProjectionRequest>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<ProjectionRequest>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<ProjectionRequest>> {
    let mut requests = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        requests.push(row.to_request()?);
    }

    log::debug!("loaded {} scenarios", requests.len());
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    const SAMPLE: &str = "\
Name,Initial,RatePercent,RateBasis,Contribution,Months
baseline,1000,2,monthly,100,12
annual,1000,12,annual,100,36
no-basis,500,1.5,,50,6
missing-months,500,1.5,monthly,50,
";

    #[test]
    fn test_load_from_reader() {
        let requests = load_scenarios_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(requests.len(), 4);

        assert_eq!(requests[0].name.as_deref(), Some("baseline"));
        assert_eq!(requests[1].rate_basis, RateBasis::Annual);
        assert_eq!(requests[2].rate_basis, RateBasis::Monthly);
        assert_eq!(requests[3].months, None);

        assert!(requests[0].to_params().is_ok());
        assert!(matches!(
            requests[3].to_params(),
            Err(ProjectionError::MissingParameter("months"))
        ));
    }

    #[test]
    fn test_unknown_basis_is_error() {
        let data = "Name,Initial,RatePercent,RateBasis,Contribution,Months\nx,1,1,weekly,1,1\n";
        assert!(load_scenarios_from_reader(data.as_bytes()).is_err());
    }

    #[test]
    fn test_default_scenarios_file() {
        let requests = load_scenarios(DEFAULT_SCENARIOS_PATH).expect("Failed to load scenarios");
        assert!(!requests.is_empty());
        assert!(requests.iter().all(|r| r.to_params().is_ok()));
    }
}
