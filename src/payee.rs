use std::sync::LazyLock;

/// Known merchants, as `(pattern, label)`
///
/// First match wins, so a pattern must be declared before any shorter pattern it contains.
/// Text is cleaned before matching, so `DK ARBEJDERNES LANDSBANK` is unreachable: the `DK `
/// noise token is already gone and `ARBEJDERNES LANDSBANK` matches instead.
pub const PAYEE_RULES: &[(&str, &str)] = &[
    ("ZARA", "Zara"),
    ("APCOA", "Apcoa"),
    ("NETTO", "Netto"),
    ("Føtex", "Føtex"),
    ("Lønoverførsel", "Salary"),
    ("JYSK Varme", "Jysk Varme"),
    ("JYSK", "Jysk"),
    ("IKEA", "Ikea"),
    ("Lagkagehuset", "Lagkagehuset"),
    ("McDonald", "McDonalds"),
    ("Børneloppen", "Børneloppen"),
    ("Bauhaus", "Bauhaus"),
    ("Sliders", "Sliders"),
    ("DK ARBEJDERNES LANDSBANK", "ATM"),
    ("F@TEX", "Føtex"),
    ("VERDO", "Verdo"),
    ("Flying Tiger", "Flying Tiger"),
    ("Irma", "Irma"),
    ("DANICA", "Danica Pension Ejd. Invest."),
    ("Sluseholmens Apotek", "Sluseholmens Apotek"),
    ("NEMLIG.COM", "nemlig.com"),
    ("SPOTIFY", "Spotify"),
    ("Wolt", "Wolt"),
    ("B@RNELOPPEN", "Børneloppen"),
    ("JUNO", "Juno"),
    ("HARALD NYBORG", "Harald Nyborg"),
    ("PROSA", "PROSA"),
    ("SILVAN", "Silvan"),
    ("DINOS LEGELAND", "Dinos Legeland"),
    ("matas", "Matas"),
    ("VALBY TANDKLINI", "Valby Tandklinik"),
    ("VALBY TANDPLEJE", "Valby Tandpleje"),
    ("ZOOLOGISK HAVE", "Zoologisk Have"),
    ("La Focaccia", "La Focaccia"),
    ("7-Eleven", "7-Eleven"),
    ("BOG IDE", "Bog & Idé"),
    ("Zalando", "Zalando"),
    ("Københavns Kommune", "Københavns Kommune"),
    ("TRYG", "Tryg"),
    ("BAHNE", "Bahne"),
    ("S@STRENE GRENE", "Søstrene Grene"),
    ("Henri", "Henri"),
    ("NORMAL", "NORMAL"),
    ("Muban Thai", "Muban Thai"),
    ("Uno-X", "Uno-X"),
    ("Q-Park", "Q-Park"),
    ("SuperBrugsen", "SuperBrugsen"),
    ("Spar", "Spar"),
    ("Fakta", "Fakta"),
    ("PLEO", "PLEO"),
    ("1 stk. hævning i andre pengeinst", "Bank Expenses"),
    ("Rente", "Bank Expenses"),
    ("CIRCLE K", "Circle K"),
    ("BILKA", "Bilka"),
    ("SAXO", "Saxo"),
    ("Skatteforvaltningen", "Skatteforvaltningen"),
    ("VESTERBRO KONTORFORSYN", "Vesterbro Kontorforsyning"),
    ("Amazon Video", "Amazon Video"),
    ("ARBEJDERNES LANDSBANK", "Arbejdernes Landsbank"),
    ("EASYJET", "EasyJet"),
    ("FISKERYTTEREN", "Fiskerytteren"),
    ("NORDISK FILM", "Nordisk Film"),
    ("COS DK0560", "COS"),
    ("Sn.Nord* Vpncom", "NordVPN"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayeeRule {
    pub pattern: String,
    pub label: String,
}

impl PayeeRule {
    pub fn new(pattern: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            label: label.into(),
        }
    }
}

/// A rule paired with its pattern in comparable form
#[derive(Debug)]
struct CompiledRule {
    rule: PayeeRule,
    needle: String,
}

/// Resolves cleaned bank text to a merchant label
///
/// Text and patterns are compared without whitespace and in lower case. Rules are tried in
/// declaration order and never reordered.
#[derive(Debug)]
pub struct PayeeMatcher {
    rules: Vec<CompiledRule>,
}

impl PayeeMatcher {
    pub fn new(rules: impl IntoIterator<Item = PayeeRule>) -> Self {
        let rules = rules
            .into_iter()
            .map(|rule| CompiledRule {
                needle: squash(&rule.pattern),
                rule,
            })
            .collect();
        Self { rules }
    }

    /// Matcher over [`PAYEE_RULES`], built on first use
    pub fn builtin() -> &'static PayeeMatcher {
        static BUILTIN: LazyLock<PayeeMatcher> = LazyLock::new(|| {
            PayeeMatcher::new(
                PAYEE_RULES
                    .iter()
                    .map(|(pattern, label)| PayeeRule::new(*pattern, *label)),
            )
        });
        &BUILTIN
    }

    pub fn find(&self, text: &str) -> Option<&PayeeRule> {
        let haystack = squash(text);
        self.rules
            .iter()
            .find(|cr| haystack.contains(&cr.needle))
            .map(|cr| &cr.rule)
    }

    /// Label of the first matching rule, or the text itself
    pub fn resolve(&self, text: &str) -> String {
        match self.find(text) {
            Some(rule) => {
                tracing::debug!("Payee '{text}' matched '{}'", rule.pattern);
                rule.label.clone()
            }
            None => text.to_owned(),
        }
    }
}

fn squash(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
