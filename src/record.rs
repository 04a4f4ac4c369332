use serde::{Deserialize, Deserializer, Serialize};

use crate::amount::{parse_amount, Direction};
use crate::category::map_category;
use crate::error::Result;
use crate::payee::PayeeMatcher;
use crate::text::TextCleaner;

/// One line of a Sydbank export
///
/// Empty cells deserialize to `None`, like missing columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Date", alias = "Dato", default, deserialize_with = "non_empty")]
    pub date: Option<String>,
    #[serde(rename = "Text", alias = "Tekst", default, deserialize_with = "non_empty")]
    pub text: Option<String>,
    #[serde(
        rename = "Amount",
        alias = "Beløb",
        alias = "Beloeb",
        default,
        deserialize_with = "non_empty"
    )]
    pub amount: Option<String>,
    #[serde(
        rename = "Maincategory",
        alias = "MainCategory",
        alias = "Hovedkategori",
        default,
        deserialize_with = "non_empty"
    )]
    pub main_category: Option<String>,
    #[serde(
        rename = "Category",
        alias = "Kategori",
        default,
        deserialize_with = "non_empty"
    )]
    pub category: Option<String>,
}

fn non_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}

/// One line of a YNAB import file
///
/// At most one of `outflow` and `inflow` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NormalizedEntry {
    pub date: String,
    pub payee: String,
    pub category: String,
    pub memo: String,
    pub outflow: String,
    pub inflow: String,
}

/// Turns raw statement lines into YNAB entries
#[derive(Debug, Clone, Copy)]
pub struct Transformer<'a> {
    cleaner: TextCleaner<'a>,
    payees: &'a PayeeMatcher,
}

impl Default for Transformer<'static> {
    fn default() -> Self {
        Self::new(TextCleaner::default(), PayeeMatcher::builtin())
    }
}

impl<'a> Transformer<'a> {
    pub fn new(cleaner: TextCleaner<'a>, payees: &'a PayeeMatcher) -> Self {
        Self { cleaner, payees }
    }

    /// Fields are filled independently; a missing source field leaves its target empty.
    ///
    /// Fails only on an amount that is not a number.
    pub fn transform(&self, raw: &RawRecord) -> Result<NormalizedEntry> {
        let mut entry = NormalizedEntry::default();

        if let Some(date) = &raw.date {
            entry.date = convert_date(date);
        }

        if let Some(amount) = &raw.amount {
            let amount = parse_amount(amount)?;
            let formatted = amount.formatted();
            match amount.direction {
                Direction::Outflow => entry.outflow = formatted,
                Direction::Inflow => entry.inflow = formatted,
            }
            entry.memo = amount.direction.memo().to_owned();
        }

        if let (Some(main_category), Some(category)) = (&raw.main_category, &raw.category) {
            let mapping = map_category(main_category, category);
            entry.category = mapping.category;
            entry.memo = mapping.memo;
        }

        if let Some(text) = &raw.text {
            entry.payee = self.payees.resolve(&self.cleaner.clean(text));
        }

        Ok(entry)
    }
}

/// `26.01.2022` becomes `26/01/2022`. Nothing is validated.
pub fn convert_date(date: &str) -> String {
    date.replace('.', "/")
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;
    use crate::payee::PayeeRule;

    fn record(date: &str, text: &str, amount: &str) -> RawRecord {
        RawRecord {
            date: Some(date.to_owned()),
            text: Some(text.to_owned()),
            amount: Some(amount.to_owned()),
            ..RawRecord::default()
        }
    }

    #[test]
    fn should_transform_an_outflow() {
        let entry = Transformer::default()
            .transform(&record("26.01.2022", "NETTO 1234", "-10000,00"))
            .expect("entry");
        assert_eq!(
            NormalizedEntry {
                date: "26/01/2022".to_owned(),
                payee: "Netto".to_owned(),
                category: String::new(),
                memo: "Outflow".to_owned(),
                outflow: "10000.00".to_owned(),
                inflow: String::new(),
            },
            entry
        );
    }

    #[test]
    fn should_transform_an_inflow() {
        let entry = Transformer::default()
            .transform(&record("31.01.2022", "Lønoverførsel", "3.500.000"))
            .expect("entry");
        assert_eq!(
            NormalizedEntry {
                date: "31/01/2022".to_owned(),
                payee: "Salary".to_owned(),
                category: String::new(),
                memo: "Inflow".to_owned(),
                outflow: String::new(),
                inflow: "35000.00".to_owned(),
            },
            entry
        );
    }

    #[test]
    fn should_treat_zero_as_inflow() {
        let entry = Transformer::default()
            .transform(&record("01.02.2022", "Rente", "0,00"))
            .expect("entry");
        assert_eq!("0.00", entry.inflow);
        assert_eq!("", entry.outflow);
        assert_eq!("Inflow", entry.memo);
        assert_eq!("Bank Expenses", entry.payee);
    }

    #[test]
    fn should_keep_unknown_payees() {
        let entry = Transformer::default()
            .transform(&record("02.02.2022", "MobilePay Johnny   Olsen", "-250,00"))
            .expect("entry");
        assert_eq!("MobilePay Johnny Olsen", entry.payee);
    }

    #[test]
    fn should_let_category_mapping_replace_the_direction_memo() {
        let raw = RawRecord {
            main_category: Some("Dagligvarer".to_owned()),
            category: Some("Supermarked".to_owned()),
            ..record("26.01.2022", "NETTO", "-10000,00")
        };
        let entry = Transformer::default().transform(&raw).expect("entry");
        assert_eq!("", entry.category);
        assert_eq!("", entry.memo);
        assert_eq!("10000.00", entry.outflow);
    }

    #[test]
    fn should_keep_the_direction_memo_with_a_partial_category() {
        let raw = RawRecord {
            category: Some("Supermarked".to_owned()),
            ..record("26.01.2022", "NETTO", "-10000,00")
        };
        let entry = Transformer::default().transform(&raw).expect("entry");
        assert_eq!("Outflow", entry.memo);
    }

    #[test]
    fn should_leave_missing_fields_empty() {
        let entry = Transformer::default()
            .transform(&RawRecord::default())
            .expect("entry");
        assert_eq!(NormalizedEntry::default(), entry);

        let entry = Transformer::default()
            .transform(&RawRecord {
                text: Some("IKEA".to_owned()),
                ..RawRecord::default()
            })
            .expect("entry");
        assert_eq!(
            NormalizedEntry {
                payee: "Ikea".to_owned(),
                ..NormalizedEntry::default()
            },
            entry
        );
    }

    #[test]
    fn should_fail_on_malformed_amount() {
        let result = Transformer::default().transform(&record("26.01.2022", "NETTO", "n/a"));
        assert!(matches!(result, Err(Error::MalformedAmount { raw }) if raw == "n/a"));
    }

    #[test]
    fn should_never_reach_rules_starting_with_a_noise_token() {
        let entry = Transformer::default()
            .transform(&RawRecord {
                text: Some("DK ARBEJDERNES LANDSBANK".to_owned()),
                ..RawRecord::default()
            })
            .expect("entry");
        assert_eq!("Arbejdernes Landsbank", entry.payee);
    }

    #[test]
    fn should_convert_dates_without_validation() {
        assert_eq!("26/01/2022", convert_date("26.01.2022"));
        assert_eq!("2022-01-26", convert_date("2022-01-26"));
        assert_eq!("32/13/2022", convert_date("32.13.2022"));
        assert_eq!("//", convert_date(".."));
    }

    #[test]
    fn should_use_injected_rules() {
        let payees = PayeeMatcher::new([PayeeRule::new("NETTO", "Discount")]);
        let transformer = Transformer::new(TextCleaner::new(&[]), &payees);
        let entry = transformer
            .transform(&record("26.01.2022", "MCDK NETTO", "-100"))
            .expect("entry");
        assert_eq!("Discount", entry.payee);
        assert_eq!("1.00", entry.outflow);
    }
}
