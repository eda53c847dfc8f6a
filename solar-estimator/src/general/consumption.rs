use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use thiserror::Error;

/// Errors for consumption files that parse but have the wrong shape.
#[derive(Debug, Error)]
pub enum ConsumptionError {
    #[error("expected 12 monthly values, got {0}")]
    WrongMonthCount(usize),
    #[error("invalid month: {0}")]
    InvalidMonth(u32),
}

/// Twelve months of electricity consumption in kWh
///
/// Sales staff batch this in from utility statements when a lead has a
/// full year of history instead of a single monthly figure.
#[derive(Debug, Clone)]
pub struct MonthlyConsumption {
    pub january: f64,
    pub february: f64,
    pub march: f64,
    pub april: f64,
    pub may: f64,
    pub june: f64,
    pub july: f64,
    pub august: f64,
    pub september: f64,
    pub october: f64,
    pub november: f64,
    pub december: f64,
}

impl MonthlyConsumption {
    pub fn month(&self, month: u32) -> Result<f64, ConsumptionError> {
        match month {
            1 => Ok(self.january),
            2 => Ok(self.february),
            3 => Ok(self.march),
            4 => Ok(self.april),
            5 => Ok(self.may),
            6 => Ok(self.june),
            7 => Ok(self.july),
            8 => Ok(self.august),
            9 => Ok(self.september),
            10 => Ok(self.october),
            11 => Ok(self.november),
            12 => Ok(self.december),
            _ => Err(ConsumptionError::InvalidMonth(month)),
        }
    }

    /// Mean monthly consumption, the figure the estimator takes as input.
    pub fn average(&self) -> f64 {
        (self.january
            + self.february
            + self.march
            + self.april
            + self.may
            + self.june
            + self.july
            + self.august
            + self.september
            + self.october
            + self.november
            + self.december)
            / 12.0
    }

    fn from_values(values: &[f64]) -> Result<Self, ConsumptionError> {
        if values.len() != 12 {
            return Err(ConsumptionError::WrongMonthCount(values.len()));
        }

        Ok(MonthlyConsumption {
            january: values[0],
            february: values[1],
            march: values[2],
            april: values[3],
            may: values[4],
            june: values[5],
            july: values[6],
            august: values[7],
            september: values[8],
            october: values[9],
            november: values[10],
            december: values[11],
        })
    }
}

/// Loads twelve months of consumption from a CSV file
///
/// Accepts one value per line, optionally prefixed by a month label
/// ("January,412.5"), with an optional header line. Decimal commas from
/// exported utility statements ("412,5") are accepted on single-column
/// lines.
///
/// # Arguments
/// * `file_path` - Path to the CSV file with monthly consumption in kWh
///
/// # Returns
/// * The twelve monthly values in file order, January first
pub fn load_monthly_consumption(file_path: &str) -> Result<MonthlyConsumption> {
    let file =
        File::open(file_path).with_context(|| format!("Failed to open file: {}", file_path))?;

    let reader = BufReader::new(file);
    let mut values = Vec::new();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        // Header line detection: first line with no digits at all.
        if line_num == 0 && !trimmed.chars().any(|c| c.is_ascii_digit()) {
            continue;
        }

        let value = parse_consumption_line(trimmed).with_context(|| {
            format!(
                "Failed to parse consumption value on line {}: '{}'",
                line_num + 1,
                trimmed
            )
        })?;
        values.push(value);
    }

    let consumption = MonthlyConsumption::from_values(&values)
        .with_context(|| format!("Invalid consumption file: {}", file_path))?;

    Ok(consumption)
}

/// Parse one line of a consumption file, taking the last column as the
/// value and treating a decimal comma as a decimal point when the line
/// has no label column.
fn parse_consumption_line(line: &str) -> Result<f64> {
    // "label,412.5" style: the value is the last column.
    if let Some((label, value)) = line.rsplit_once(',') {
        if !label.trim().is_empty() && !label.trim().chars().all(|c| c.is_ascii_digit()) {
            return value
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid number: '{}'", value.trim()));
        }
    }

    // Single column, possibly with a decimal comma.
    let normalized = line.replace(',', ".");
    normalized
        .parse::<f64>()
        .with_context(|| format!("Invalid number: '{}'", line))
}

/// Derive a monthly consumption estimate from a bill amount when no
/// consumption figure was submitted.
///
/// # Arguments
/// * `average_monthly_bill` - Monthly bill in USD
/// * `price_per_kwh` - Energy price used to back out the consumption
pub fn consumption_from_bill(average_monthly_bill: f64, price_per_kwh: f64) -> f64 {
    if price_per_kwh <= 0.0 {
        return 0.0;
    }

    average_monthly_bill / price_per_kwh
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(&temp_file, contents).unwrap();
        temp_file
    }

    #[test]
    fn test_load_monthly_consumption_plain_values() {
        let data = "400\n410\n390\n420\n450\n480\n500\n510\n470\n440\n415\n405\n";
        let temp_file = write_temp(data);

        let consumption = load_monthly_consumption(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(consumption.january, 400.0);
        assert_eq!(consumption.december, 405.0);
        assert_eq!(consumption.month(7).unwrap(), 500.0);
    }

    #[test]
    fn test_load_monthly_consumption_labeled_with_header() {
        let data = "Month,kWh\n\
            January,412.5\nFebruary,398.0\nMarch,405.0\nApril,430.0\n\
            May,455.5\nJune,470.0\nJuly,502.0\nAugust,498.0\n\
            September,460.0\nOctober,441.0\nNovember,420.0\nDecember,409.0\n";
        let temp_file = write_temp(data);

        let consumption = load_monthly_consumption(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(consumption.january, 412.5);
        assert_eq!(consumption.august, 498.0);
    }

    #[test]
    fn test_load_monthly_consumption_decimal_comma() {
        let data = "400,5\n410\n390\n420\n450\n480\n500\n510\n470\n440\n415\n405\n";
        let temp_file = write_temp(data);

        let consumption = load_monthly_consumption(temp_file.path().to_str().unwrap()).unwrap();
        assert_eq!(consumption.january, 400.5);
    }

    #[test]
    fn test_load_monthly_consumption_wrong_count() {
        let temp_file = write_temp("400\n410\n390\n");

        let result = load_monthly_consumption(temp_file.path().to_str().unwrap());
        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("expected 12 monthly values, got 3"));
    }

    #[test]
    fn test_monthly_consumption_average() {
        let consumption = MonthlyConsumption {
            january: 300.0,
            february: 300.0,
            march: 300.0,
            april: 300.0,
            may: 300.0,
            june: 300.0,
            july: 600.0,
            august: 600.0,
            september: 600.0,
            october: 600.0,
            november: 600.0,
            december: 600.0,
        };
        assert_eq!(consumption.average(), 450.0);
    }

    #[test]
    fn test_invalid_month() {
        let consumption = MonthlyConsumption {
            january: 1.0,
            february: 2.0,
            march: 3.0,
            april: 4.0,
            may: 5.0,
            june: 6.0,
            july: 7.0,
            august: 8.0,
            september: 9.0,
            october: 10.0,
            november: 11.0,
            december: 12.0,
        };
        assert!(consumption.month(13).is_err());
    }

    #[test]
    fn test_consumption_from_bill() {
        assert_eq!(consumption_from_bill(75.0, 0.15), 500.0);
        assert_eq!(consumption_from_bill(75.0, 0.0), 0.0);
    }
}
