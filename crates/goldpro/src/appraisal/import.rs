use serde::{Deserialize, Deserializer};
use std::io::Read;

use super::domain::ArticleRequest;
use super::purity::PurityMode;

/// Bulk article intake from a CSV sheet with the columns
/// `Article,Qty,Gross,Stone,Purity`. The purity cell accepts either a
/// touch percentage (`85` or `85%`) or a hallmark key (`20krt`); anything
/// unusable falls back through the same conservative defaults as the form.
pub struct CsvArticleImporter;

impl CsvArticleImporter {
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ArticleRequest>, ArticleImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut requests = Vec::new();
        for (index, record) in csv_reader.deserialize::<ArticleRow>().enumerate() {
            let row = record?;
            requests.push(row.into_request(index + 1)?);
        }

        Ok(requests)
    }
}

#[derive(Debug, Deserialize)]
struct ArticleRow {
    #[serde(rename = "Article")]
    article: String,
    #[serde(rename = "Qty", default, deserialize_with = "empty_string_as_none")]
    qty: Option<String>,
    #[serde(rename = "Gross")]
    gross: String,
    #[serde(rename = "Stone", default, deserialize_with = "empty_string_as_none")]
    stone: Option<String>,
    #[serde(rename = "Purity", default, deserialize_with = "empty_string_as_none")]
    purity: Option<String>,
}

impl ArticleRow {
    fn into_request(self, row: usize) -> Result<ArticleRequest, ArticleImportError> {
        let gross = self
            .gross
            .trim()
            .parse::<f64>()
            .map_err(|_| ArticleImportError::InvalidNumber {
                row,
                field: "Gross",
                value: self.gross.clone(),
            })?;

        let qty = match self.qty.as_deref() {
            Some(value) => value
                .parse::<u32>()
                .map_err(|_| ArticleImportError::InvalidNumber {
                    row,
                    field: "Qty",
                    value: value.to_string(),
                })?,
            None => 1,
        };

        let stone = match self.stone.as_deref() {
            Some(value) => value
                .parse::<f64>()
                .map_err(|_| ArticleImportError::InvalidNumber {
                    row,
                    field: "Stone",
                    value: value.to_string(),
                })?,
            None => 0.0,
        };

        let purity_mode = match self.purity.as_deref() {
            Some(value) if value.trim().to_ascii_lowercase().ends_with("krt") => PurityMode::Karat,
            _ => PurityMode::Touch,
        };

        Ok(ArticleRequest {
            name: self.article,
            qty,
            gross,
            stone,
            purity_mode,
            selector: self.purity,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Error raised while reading an article sheet.
#[derive(Debug, thiserror::Error)]
pub enum ArticleImportError {
    #[error("failed to read article csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: invalid {field} value '{value}'")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appraisal::purity::{KaratGrade, Purity};
    use crate::appraisal::session::ArticleDraft;
    use std::io::Cursor;

    const SHEET: &str = "\
Article,Qty,Gross,Stone,Purity
Necklace,1,10.000,0.500,85
Rings,2,4.250,,22krt
Antique Kasu Mala,,7.125,0.250,
";

    #[test]
    fn parses_rows_with_trimming_and_defaults() {
        let requests =
            CsvArticleImporter::from_reader(Cursor::new(SHEET)).expect("sheet parses");
        assert_eq!(requests.len(), 3);

        let necklace = ArticleDraft::from(requests[0].clone());
        assert_eq!(necklace.purity, Purity::Touch(85.0));
        assert_eq!(necklace.qty, 1);

        let rings = ArticleDraft::from(requests[1].clone());
        assert_eq!(rings.purity, Purity::Karat(KaratGrade::K22));
        assert_eq!(rings.qty, 2);
        assert_eq!(rings.stone, 0.0);

        let other = ArticleDraft::from(requests[2].clone());
        assert_eq!(other.qty, 1);
        assert_eq!(other.purity, Purity::Touch(85.0));
    }

    #[test]
    fn unusable_purity_cell_falls_back() {
        let sheet = "Article,Qty,Gross,Stone,Purity\nChain,1,5.0,0,pure gold\n";
        let requests =
            CsvArticleImporter::from_reader(Cursor::new(sheet)).expect("sheet parses");
        let draft = ArticleDraft::from(requests[0].clone());
        assert_eq!(draft.purity, Purity::Touch(85.0));
    }

    #[test]
    fn unknown_karat_cell_falls_back_to_20krt() {
        let sheet = "Article,Qty,Gross,Stone,Purity\nChain,1,5.0,0,24krt\n";
        let requests =
            CsvArticleImporter::from_reader(Cursor::new(sheet)).expect("sheet parses");
        let draft = ArticleDraft::from(requests[0].clone());
        assert_eq!(draft.purity, Purity::Karat(KaratGrade::K20));
    }

    #[test]
    fn rejects_unparseable_gross() {
        let sheet = "Article,Qty,Gross,Stone,Purity\nChain,1,heavy,0,85\n";
        let err = CsvArticleImporter::from_reader(Cursor::new(sheet))
            .expect_err("gross must be numeric");
        match err {
            ArticleImportError::InvalidNumber { row, field, value } => {
                assert_eq!(row, 1);
                assert_eq!(field, "Gross");
                assert_eq!(value, "heavy");
            }
            other => panic!("expected invalid number error, got {other:?}"),
        }
    }
}
