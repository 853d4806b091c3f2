use std::io::Read;

use serde::{Deserialize, Deserializer};

use super::domain::{CardId, CardInput};

#[derive(Debug, thiserror::Error)]
pub enum CardImportError {
    #[error("failed to read cards CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("cards CSV row {row} has an empty id")]
    MissingId { row: usize },
}

#[derive(Debug, Deserialize)]
struct CardRow {
    id: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    name: Option<String>,
    #[serde(default)]
    debt: String,
    #[serde(default)]
    rate: String,
    #[serde(default)]
    minimum: String,
}

/// Reads cards from a CSV with `id,name,debt,rate,minimum` headers. Amounts
/// stay as typed (`"1.234,56"`) and are parsed by the engine.
pub fn import_cards<R: Read>(reader: R) -> Result<Vec<CardInput>, CardImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut cards = Vec::new();

    for (index, record) in csv_reader.deserialize::<CardRow>().enumerate() {
        let row = record?;
        if row.id.is_empty() {
            return Err(CardImportError::MissingId { row: index + 1 });
        }

        cards.push(CardInput {
            id: CardId(row.id),
            name: row.name.unwrap_or_default(),
            total_debt: row.debt,
            monthly_rate: row.rate,
            minimum_payment: row.minimum,
            use_average_rate: false,
        });
    }

    Ok(cards)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_cards_with_quoted_amounts() {
        let csv = "id,name,debt,rate,minimum\n\
                   1,Nubank,\"3.200,00\",\"14,50\",\"180,00\"\n\
                   2,,\"950,00\",\"8,00\",\"60,00\"\n";

        let cards = import_cards(csv.as_bytes()).expect("csv parses");

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, CardId("1".to_string()));
        assert_eq!(cards[0].name, "Nubank");
        assert_eq!(cards[0].total_debt, "3.200,00");
        assert_eq!(cards[0].monthly_rate, "14,50");
        assert_eq!(cards[1].display_name(), "Cartão 2");
    }

    #[test]
    fn rejects_rows_without_id() {
        let csv = "id,name,debt,rate,minimum\n ,Inter,100,5,10\n";
        let err = import_cards(csv.as_bytes()).expect_err("missing id rejected");
        assert!(matches!(err, CardImportError::MissingId { row: 1 }));
    }

    #[test]
    fn surfaces_malformed_csv() {
        let csv = "id,name,debt,rate,minimum\n1,Inter,100\n";
        assert!(matches!(
            import_cards(csv.as_bytes()),
            Err(CardImportError::Csv(_))
        ));
    }
}
